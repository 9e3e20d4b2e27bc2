use crate::domain::{GeoPoint, GeoPointError, LocalOffset};
use thiserror::Error;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Scale factor for the no-fix placement: raw degrees times this constant.
/// Gives a stable demo layout, not a geodesic one.
const NO_FIX_SCALE: f64 = 10.0;

/// Projects `target` onto the local tangent plane around `observer`.
///
/// Distance is great-circle (haversine), bearing is the initial bearing of the
/// great-circle path, and `east`/`north` decompose the two back into planar
/// components. Coincident points yield a zero offset with bearing 0.
///
/// Without an observer fix the target's raw coordinates scaled by
/// [`NO_FIX_SCALE`] are used instead. That placement is deterministic and
/// side-effect-free but intentionally approximate; it exists so markers show
/// up before the first fix arrives.
///
/// Both positions are validated before any trigonometry so that NaN or
/// out-of-range coordinates never end up in a scene position.
pub fn project(observer: Option<&GeoPoint>, target: &GeoPoint) -> Result<LocalOffset, ProjectionError> {
    if let Some(observer) = observer {
        observer.validate().map_err(ProjectionError::InvalidObserver)?;
    }
    target.validate().map_err(ProjectionError::InvalidTarget)?;

    let Some(observer) = observer else {
        return Ok(no_fix_placement(target));
    };

    let lat1 = observer.latitude.to_radians();
    let lat2 = target.latitude.to_radians();
    let d_lat = (target.latitude - observer.latitude).to_radians();
    let d_lng = (target.longitude - observer.longitude).to_radians();

    // Haversine. Rounding can push a past 1 for near-antipodal pairs, which
    // would turn the square roots into NaN, hence the clamp.
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance_m = EARTH_RADIUS_M * c;

    if distance_m == 0.0 {
        return Ok(LocalOffset {
            east: 0.0,
            north: 0.0,
            distance_m: 0.0,
            bearing_rad: 0.0,
        });
    }

    // Initial bearing, clockwise from north
    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    let bearing_rad = y.atan2(x);

    Ok(LocalOffset {
        east: distance_m * bearing_rad.sin(),
        north: distance_m * bearing_rad.cos(),
        distance_m,
        bearing_rad,
    })
}

fn no_fix_placement(target: &GeoPoint) -> LocalOffset {
    let east = target.longitude * NO_FIX_SCALE;
    let north = target.latitude * NO_FIX_SCALE;

    LocalOffset {
        east,
        north,
        distance_m: east.hypot(north),
        bearing_rad: east.atan2(north),
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ProjectionError {
    #[error("invalid observer position: {0}")]
    InvalidObserver(GeoPointError),
    #[error("invalid target position: {0}")]
    InvalidTarget(GeoPointError),
}
