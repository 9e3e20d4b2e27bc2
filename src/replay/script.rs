use crate::domain::GeoPoint;
use serde::Deserialize;
use std::time::Duration;

/// One step of a scripted session: a GPS fix held for a while, or a tap on a
/// marker node. Stands in for the device location service and gesture layer.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReplayStep {
    Fix(FixStep),
    Tap(TapStep),
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct FixStep {
    pub(crate) location: GeoPoint,
    #[serde(with = "humantime_serde")]
    pub(crate) hold: Duration,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TapStep {
    pub(crate) node_id: String,
}
