use thiserror::Error;

/// An absolute position on Earth in degrees. Latitude is in [-90, 90],
/// longitude in [-180, 180], both finite.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<GeoPoint, GeoPointError> {
        let point = GeoPoint { latitude, longitude };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), GeoPointError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(GeoPointError::NonFiniteCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoPointError::LatitudeOutOfRange(self.latitude));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoPointError::LongitudeOutOfRange(self.longitude));
        }

        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoPointError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    LongitudeOutOfRange(f64),
    #[error("coordinates must be finite, got latitude {latitude} and longitude {longitude}")]
    NonFiniteCoordinate { latitude: f64, longitude: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::origin(0.0, 0.0)]
    #[case::north_pole(90.0, 0.0)]
    #[case::south_pole(-90.0, 0.0)]
    #[case::date_line_east(0.0, 180.0)]
    #[case::date_line_west(0.0, -180.0)]
    #[case::amsterdam(52.3676, 4.9041)]
    fn new_accepts_in_range_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        let point = GeoPoint::new(latitude, longitude).unwrap();
        assert_eq!(point, GeoPoint { latitude, longitude });
    }

    #[rstest]
    #[case::latitude_too_high(95.0, 0.0, GeoPointError::LatitudeOutOfRange(95.0))]
    #[case::latitude_too_low(-90.1, 0.0, GeoPointError::LatitudeOutOfRange(-90.1))]
    #[case::longitude_too_high(0.0, 181.0, GeoPointError::LongitudeOutOfRange(181.0))]
    #[case::longitude_too_low(0.0, -180.5, GeoPointError::LongitudeOutOfRange(-180.5))]
    fn new_rejects_out_of_range_coordinates(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: GeoPointError) {
        assert_eq!(GeoPoint::new(latitude, longitude).unwrap_err(), expected);
    }

    #[rstest]
    #[case::nan_latitude(f64::NAN, 0.0)]
    #[case::nan_longitude(0.0, f64::NAN)]
    #[case::infinite_latitude(f64::INFINITY, 0.0)]
    #[case::infinite_longitude(0.0, f64::NEG_INFINITY)]
    fn new_rejects_non_finite_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(matches!(
            GeoPoint::new(latitude, longitude).unwrap_err(),
            GeoPointError::NonFiniteCoordinate { .. }
        ));
    }
}
