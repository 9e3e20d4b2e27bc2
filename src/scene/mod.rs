mod placement;
mod sink;

pub use placement::Placement;
pub use sink::{LogSceneSink, SceneSink};
