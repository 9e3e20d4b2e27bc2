use crate::domain::GeoPoint;

/// A point of interest to overlay on the camera feed.
#[derive(Clone, PartialEq, Debug)]
pub struct Poi {
    pub id: String,
    pub location: GeoPoint,
    pub label: String,
    pub url: String,
    pub icon: String,
    pub rating: f64,
    pub votes: u32,
}

impl Poi {
    /// Five-star rating string for the marker card, e.g. "★★★★☆" for 4.2.
    pub fn star_rating(&self) -> String {
        let full = (self.rating.floor() as usize).min(5);
        "★".repeat(full) + &"☆".repeat(5 - full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0, "☆☆☆☆☆")]
    #[case::fractions_round_down(4.2, "★★★★☆")]
    #[case::almost_full(4.9, "★★★★☆")]
    #[case::full(5.0, "★★★★★")]
    #[case::two_and_a_half(2.5, "★★☆☆☆")]
    fn star_rating_renders_five_stars(#[case] rating: f64, #[case] expected: &str) {
        let poi = Poi {
            id: "museum".to_string(),
            location: GeoPoint::new(52.36, 4.885).unwrap(),
            label: "Rijksmuseum".to_string(),
            url: "https://example.com/museum".to_string(),
            icon: "🏛️".to_string(),
            rating,
            votes: 12,
        };

        assert_eq!(poi.star_rating(), expected);
    }
}
