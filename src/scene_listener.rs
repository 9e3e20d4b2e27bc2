use crate::scene::SceneSink;
use crate::store::PlacementMap;
use tokio::sync::watch::Receiver;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn scene_listener(mut rx: Receiver<PlacementMap>, sink: Box<dyn SceneSink>) {
    while rx.changed().await.is_ok() {
        let snapshot: PlacementMap = rx.borrow().clone();
        let read_guard = snapshot.read().await;
        sink.apply(&read_guard).await;
    }
}
