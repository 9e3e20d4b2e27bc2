use crate::app_config::AppConfig;
use crate::domain::{Event, Selection};
use crate::scene::LogSceneSink;
use crate::scene_listener::scene_listener;
use crate::selection_listener::selection_listener;
use crate::store::SessionStore;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

mod app_config;
mod domain;
mod geo_point_deserializer;
mod poi_loader;
mod projector;
mod replay;
mod scene;
mod scene_listener;
mod selection_listener;
mod store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🧭 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let pois = poi_loader::load_pois_from(config.pois().directory(), "json").await?;

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let (selection_tx, selection_rx) = mpsc::channel::<Selection>(config.core().selection_buffer_size());
    let mut store = SessionStore::new(rx, selection_tx, config.markers().height_m());
    let notifier_rx = store.notifier();

    task::spawn(async move {
        scene_listener(notifier_rx, Box::new(LogSceneSink)).await;
    });
    info!("✅  Initialized scene listener");

    task::spawn(async move {
        selection_listener(selection_rx).await;
    });
    info!("✅  Initialized selection listener");

    task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized session store");

    tx.send(Event::PoisRegistered(pois))
        .await
        .expect("Could not register the POIs with the session store");

    info!("🧭 {} is up and running", env!("CARGO_PKG_NAME"));

    replay::play(config.replay().script(), tx).await?;

    Ok(())
}
