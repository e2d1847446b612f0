// SPDX-License-Identifier: MPL-2.0
//! Tokio driver for the playback engine.
//!
//! The engine itself is synchronous. [`drive`] owns it on a task, feeds it
//! events from an unbounded channel in arrival order and sleeps until the
//! next timer deadline in between, so the engine stays single-threaded while
//! the host talks to it through a cloneable [`EngineHandle`].
//!
//! Time comes from tokio's clock so tests can run with paused time.

use super::engine::{EngineEvent, PlaybackEngine};
use crate::error::{Error, Result};
use std::time::Instant;
use tokio::sync::mpsc;

/// Sends events to a driven engine. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl EngineHandle {
    /// Queues an event for the engine task.
    pub fn send(&self, event: EngineEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| Error::EngineStopped)
    }

    /// Returns true while the engine task is still receiving.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Creates the handle and the receiving end to pass to [`drive`].
#[must_use]
pub fn channel() -> (EngineHandle, mpsc::UnboundedReceiver<EngineEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EngineHandle { tx }, rx)
}

fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Runs `engine` until its session ends or every handle is dropped, then
/// hands it back.
///
/// An ended session keeps the driver receiving until the play request
/// detached at teardown has settled, so its deferred pause still lands.
pub async fn drive(
    mut engine: PlaybackEngine,
    mut events: mpsc::UnboundedReceiver<EngineEvent>,
) -> PlaybackEngine {
    while !engine.is_ended() || engine.awaiting_settlement() {
        let deadline = engine.next_deadline();
        let timer = async move {
            match deadline {
                Some(deadline) => {
                    tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
                }
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    log::debug!("All engine handles dropped, stopping driver");
                    break;
                };
                engine.handle(event, now());
            }
            () = timer => engine.tick(now()),
        }
    }
    engine
}
