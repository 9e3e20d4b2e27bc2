mod factory;
mod loader;
mod serialized_poi;

pub use loader::LoaderError;
pub use loader::load_pois_from;
