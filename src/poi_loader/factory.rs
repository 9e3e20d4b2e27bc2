use crate::domain::{GeoPoint, GeoPointError, Poi};
use crate::poi_loader::serialized_poi::{SerializedPoi, SerializedPoiSet};
use thiserror::Error;

const DEFAULT_ICON: &str = "📍";
const DEFAULT_RATING: f64 = 4.0;

pub fn from_json(json: &str) -> Result<Vec<Poi>, PoiFactoryError> {
    let set = serde_json::from_str::<SerializedPoiSet>(json)?;
    set.pois.into_iter().map(to_poi).collect()
}

fn to_poi(serialized: SerializedPoi) -> Result<Poi, PoiFactoryError> {
    if serialized.id.is_empty() {
        return Err(PoiFactoryError::MissingId);
    }

    let rating = serialized.rating.unwrap_or(DEFAULT_RATING);
    if !(0.0..=5.0).contains(&rating) {
        return Err(PoiFactoryError::RatingOutOfRange {
            poi: serialized.id,
            rating,
        });
    }

    let location = GeoPoint::new(serialized.lat, serialized.lng).map_err(|source| PoiFactoryError::InvalidLocation {
        poi: serialized.id.clone(),
        source,
    })?;

    Ok(Poi {
        id: serialized.id,
        location,
        label: serialized.label,
        url: serialized.url,
        icon: serialized.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
        rating,
        votes: serialized.votes.unwrap_or(0),
    })
}

#[derive(Error, Debug)]
pub enum PoiFactoryError {
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("a POI is missing an id")]
    MissingId,
    #[error("invalid rating {rating} for POI '{poi}', must be between 0 and 5")]
    RatingOutOfRange { poi: String, rating: f64 },
    #[error("invalid location for POI '{poi}': {source}")]
    InvalidLocation { poi: String, source: GeoPointError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_json_maps_a_full_poi() {
        let json = r#"{
            "pois": [{ "id": "museum", "lat": 52.36, "lng": 4.8852, "label": "Rijksmuseum", "url": "https://example.com/museum", "icon": "🏛️", "rating": 4.8, "votes": 12083 }]
        }"#;

        let pois = from_json(json).unwrap();

        assert_eq!(
            pois,
            vec![Poi {
                id: "museum".to_string(),
                location: GeoPoint::new(52.36, 4.8852).unwrap(),
                label: "Rijksmuseum".to_string(),
                url: "https://example.com/museum".to_string(),
                icon: "🏛️".to_string(),
                rating: 4.8,
                votes: 12083,
            }]
        );
    }

    #[test]
    fn from_json_applies_defaults_for_optional_fields() {
        let json = r#"{
            "pois": [{ "id": "cafe", "lat": 52.374, "lng": 4.8896, "label": "Café de Pont", "url": "https://example.com/cafe" }]
        }"#;

        let pois = from_json(json).unwrap();

        assert_eq!(pois[0].icon, "📍");
        assert_eq!(pois[0].rating, 4.0);
        assert_eq!(pois[0].votes, 0);
    }

    #[test]
    fn from_json_rejects_an_empty_id() {
        let json = r#"{
            "pois": [{ "id": "", "lat": 52.374, "lng": 4.8896, "label": "Café de Pont", "url": "https://example.com/cafe" }]
        }"#;

        assert!(matches!(from_json(json).unwrap_err(), PoiFactoryError::MissingId));
    }

    #[test]
    fn from_json_rejects_an_out_of_range_rating() {
        let json = r#"{
            "pois": [{ "id": "cafe", "lat": 52.374, "lng": 4.8896, "label": "Café de Pont", "url": "https://example.com/cafe", "rating": 5.5 }]
        }"#;

        let error = from_json(json).unwrap_err();

        assert!(matches!(error, PoiFactoryError::RatingOutOfRange { .. }));
        assert_eq!(error.to_string(), "invalid rating 5.5 for POI 'cafe', must be between 0 and 5");
    }

    #[test]
    fn from_json_rejects_an_out_of_range_latitude() {
        let json = r#"{
            "pois": [{ "id": "cafe", "lat": 95.0, "lng": 4.8896, "label": "Café de Pont", "url": "https://example.com/cafe" }]
        }"#;

        let error = from_json(json).unwrap_err();

        assert!(matches!(
            error,
            PoiFactoryError::InvalidLocation {
                source: GeoPointError::LatitudeOutOfRange(_),
                ..
            }
        ));
    }
}
