use crate::domain::Selection;
use tokio::sync::mpsc::Receiver;
use tracing::{info, instrument};

// Stand-in for the web bridge: the host forwards these to its
// onObjectSelected listeners.
#[instrument(skip_all)]
pub async fn selection_listener(mut rx: Receiver<Selection>) {
    while let Some(selection) = rx.recv().await {
        info!("🔔 Object selected: id '{}', url '{}'", selection.id, selection.url);
    }
}
