use serde::Deserialize;

/// Raw form of a POI definition file, one set of POIs per file.
#[derive(Debug, Deserialize)]
pub struct SerializedPoiSet {
    pub(crate) pois: Vec<SerializedPoi>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedPoi {
    pub(crate) id: String,
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    pub(crate) label: String,
    pub(crate) url: String,
    pub(crate) icon: Option<String>,
    pub(crate) rating: Option<f64>,
    pub(crate) votes: Option<u32>,
}
