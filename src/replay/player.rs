use crate::domain::{Event, Fix};
use crate::replay::script::ReplayStep;
use chrono::Utc;
use std::io;
use thiserror::Error;
use tokio::fs;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Plays a session script into the event channel: fixes are stamped with the
/// current time and held for their configured duration, taps are forwarded
/// as marker taps.
#[instrument(skip(tx))]
pub async fn play(path: &str, tx: Sender<Event>) -> Result<(), ReplayError> {
    info!("🎬 Playing session script '{}'...", path);
    let content = fs::read_to_string(path).await?;
    let steps = serde_json::from_str::<Vec<ReplayStep>>(&content)?;
    let num_steps = steps.len();

    for step in steps {
        match step {
            ReplayStep::Fix(fix) => {
                #[rustfmt::skip]
                debug!("🛰️ Fix ({:.6}, {:.6}), holding for {:?}", fix.location.latitude, fix.location.longitude, fix.hold);
                tx.send(Event::FixUpdated(Fix {
                    location: fix.location,
                    observed_at: Utc::now(),
                }))
                .await?;
                sleep(fix.hold).await;
            }
            ReplayStep::Tap(tap) => {
                debug!("👆 Tap on '{}'", tap.node_id);
                tx.send(Event::MarkerTapped { node_id: tap.node_id }).await?;
            }
        }
    }

    info!("🎬 Playing session script '{}'... OK, {} step(s)", path, num_steps);
    Ok(())
}

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    ClosedChannel(#[from] SendError<Event>),
}
