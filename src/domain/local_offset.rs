/// Planar displacement from the observer to a target, in meters.
///
/// `east` and `north` span the local tangent plane around the observer;
/// `distance_m` and `bearing_rad` are the polar form of the same displacement.
/// Bearing is measured clockwise from north and lies in (-π, π].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LocalOffset {
    pub east: f64,
    pub north: f64,
    pub distance_m: f64,
    pub bearing_rad: f64,
}

impl LocalOffset {
    /// Marker position in the scene frame: x east, y up, z south.
    /// North maps to negative z.
    pub fn scene_position(&self, height_m: f32) -> [f32; 3] {
        [self.east as f32, height_m, -self.north as f32]
    }

    /// Display label for the distance: meters below a kilometer, kilometers
    /// with one decimal from there on.
    pub fn distance_label(&self) -> String {
        if self.distance_m < 1000.0 {
            format!("{:.0}m", self.distance_m)
        } else {
            format!("{:.1}km", self.distance_m / 1000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn offset(east: f64, north: f64) -> LocalOffset {
        LocalOffset {
            east,
            north,
            distance_m: east.hypot(north),
            bearing_rad: east.atan2(north),
        }
    }

    mod scene_position {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn north_maps_to_negative_z() {
            assert_eq!(offset(0.0, 25.0).scene_position(1.5), [0.0, 1.5, -25.0]);
        }

        #[test]
        fn east_maps_to_positive_x() {
            assert_eq!(offset(40.0, 0.0).scene_position(0.0), [40.0, 0.0, 0.0]);
        }

        #[test]
        fn height_becomes_the_y_component() {
            assert_eq!(offset(3.0, -4.0).scene_position(2.0), [3.0, 2.0, 4.0]);
        }
    }

    mod distance_label {
        use super::*;
        use pretty_assertions::assert_eq;

        #[rstest]
        #[case::meters_rounded(999.4, "999m")]
        #[case::just_below_a_kilometer(999.9, "1000m")]
        #[case::exactly_a_kilometer(1000.0, "1.0km")]
        #[case::kilometers_rounded(1234.5, "1.2km")]
        #[case::close_by(12.0, "12m")]
        #[case::far_away(111_194.9, "111.2km")]
        fn formats_meters_or_kilometers(#[case] distance_m: f64, #[case] expected: &str) {
            let offset = LocalOffset {
                east: distance_m,
                north: 0.0,
                distance_m,
                bearing_rad: std::f64::consts::FRAC_PI_2,
            };
            assert_eq!(offset.distance_label(), expected);
        }
    }
}
