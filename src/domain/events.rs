use crate::domain::{GeoPoint, Poi};
use chrono::{DateTime, Utc};

/// A location snapshot from the fix provider.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Fix {
    pub location: GeoPoint,
    pub observed_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum Event {
    PoisRegistered(Vec<Poi>),
    FixUpdated(Fix),
    MarkerTapped { node_id: String },
}

/// Emitted when a tapped marker resolves to a registered POI.
#[derive(Clone, PartialEq, Debug)]
pub struct Selection {
    pub id: String,
    pub url: String,
}
