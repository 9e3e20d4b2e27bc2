use crate::domain::{LocalOffset, Poi};

/// Everything the scene layer needs to render one marker card: the scene
/// position plus the preformatted card text.
#[derive(Clone, PartialEq, Debug)]
pub struct Placement {
    pub poi_id: String,
    pub label: String,
    pub icon: String,
    pub position: [f32; 3],
    pub distance_m: f64,
    pub bearing_rad: f64,
    pub distance_label: String,
    pub star_rating: String,
    pub votes: u32,
}

impl Placement {
    pub fn new(poi: &Poi, offset: &LocalOffset, marker_height_m: f32) -> Self {
        Placement {
            poi_id: poi.id.clone(),
            label: poi.label.clone(),
            icon: poi.icon.clone(),
            position: offset.scene_position(marker_height_m),
            distance_m: offset.distance_m,
            bearing_rad: offset.bearing_rad,
            distance_label: offset.distance_label(),
            star_rating: poi.star_rating(),
            votes: poi.votes,
        }
    }
}
