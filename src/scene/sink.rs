use crate::scene::Placement;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::{info, instrument};

/// Seam towards the host 3-D toolkit. The platform AR view implements this and
/// turns placements into scene nodes.
#[async_trait]
pub trait SceneSink: Debug + Send + Sync {
    async fn apply(&self, placements: &HashMap<String, Placement>);
}

/// Default sink that logs the marker cards instead of rendering them.
#[derive(Debug, Default)]
pub struct LogSceneSink;

#[async_trait]
impl SceneSink for LogSceneSink {
    #[instrument(skip_all)]
    async fn apply(&self, placements: &HashMap<String, Placement>) {
        info!("🗺️ Applying {} marker placement(s)", placements.len());
        for placement in placements.values() {
            #[rustfmt::skip]
            info!(
                "📌 {} '{}' at [{:.1}, {:.1}, {:.1}], {} away, {} ({} votes)",
                placement.icon, placement.label,
                placement.position[0], placement.position[1], placement.position[2],
                placement.distance_label, placement.star_rating, placement.votes
            );
        }
    }
}
