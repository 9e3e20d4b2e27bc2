use crate::domain::{Event, Fix, Poi, Selection};
use crate::projector;
use crate::scene::Placement;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, instrument, warn};

pub type PlacementMap = Arc<RwLock<HashMap<String, Placement>>>;

/// Holds the live session state: the registered POIs and the latest observer
/// fix. Every change reprojects the POIs into a fresh placement map, published
/// through the watch notifier for the scene layer to pick up.
#[derive(Debug)]
pub struct SessionStore {
    pois: HashMap<String, Poi>,
    observer: Option<Fix>,
    placements: PlacementMap,
    marker_height_m: f32,
    rx: Receiver<Event>,
    selection_tx: Sender<Selection>,
    notifier_tx: WatchSender<PlacementMap>,
    notifier_rx: WatchReceiver<PlacementMap>,
}

impl SessionStore {
    pub fn new(rx: Receiver<Event>, selection_tx: Sender<Selection>, marker_height_m: f32) -> Self {
        let placements = Arc::new(RwLock::new(HashMap::new()));
        let (notifier_tx, notifier_rx) = watch::channel::<PlacementMap>(placements.clone());

        SessionStore {
            pois: HashMap::new(),
            observer: None,
            placements,
            marker_height_m,
            rx,
            selection_tx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<PlacementMap> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            match event {
                Event::PoisRegistered(pois) => {
                    let num_pois = pois.len();
                    debug!("🔵 Registering {} POI(s)...", num_pois);
                    self.pois = pois.into_iter().map(|poi| (poi.id.clone(), poi)).collect();
                    self.reproject().await;
                    info!("🔵 Registering {} POI(s)... OK", num_pois);
                }
                Event::FixUpdated(fix) => {
                    #[rustfmt::skip]
                    debug!("🛰️ Fix updated to ({:.6}, {:.6}), observed at {}", fix.location.latitude, fix.location.longitude, fix.observed_at);
                    self.observer = Some(fix);
                    self.reproject().await;
                }
                Event::MarkerTapped { node_id } => {
                    let Some(poi) = self.pois.get(&node_id) else {
                        warn!("⚠️ Tapped marker '{}' does not match a registered POI", node_id);
                        continue;
                    };

                    info!("🔔 Selected POI '{}' ({})", poi.label, poi.id);
                    let selection = Selection {
                        id: poi.id.clone(),
                        url: poi.url.clone(),
                    };
                    self.selection_tx.send(selection).await.unwrap_or_else(|e| {
                        warn!("⚠️ Could not publish selection for '{}': {}", e.0.id, e);
                    });
                }
            }
        }
    }

    async fn reproject(&self) {
        let observer = self.observer.as_ref().map(|fix| &fix.location);
        let mut placements = HashMap::with_capacity(self.pois.len());

        for poi in self.pois.values() {
            match projector::project(observer, &poi.location) {
                Ok(offset) => {
                    placements.insert(poi.id.clone(), Placement::new(poi, &offset, self.marker_height_m));
                }
                // Loader-validated POIs cannot fail projection, but a bad one
                // must never reach the scene
                Err(e) => warn!("⚠️ Skipping POI '{}', projection failed: {}", poi.id, e),
            }
        }

        let mut write_guard = self.placements.write().await;
        *write_guard = placements;
        drop(write_guard);

        self.notifier_tx.send(self.placements.clone()).unwrap_or_default();
    }
}
