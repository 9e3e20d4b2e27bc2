mod events;
mod geo_point;
mod local_offset;
mod poi;

pub use events::{Event, Fix, Selection};
pub use geo_point::{GeoPoint, GeoPointError};
pub use local_offset::LocalOffset;
pub use poi::Poi;
