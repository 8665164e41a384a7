//! Cancellable rotation timer.
//!
//! Drives auto-advancing highlights: an index that moves to the next slot
//! every fixed period until the owner stops it.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Spawns rotation tasks.
#[derive(Debug, Clone, Copy)]
pub struct RotationTimer;

impl RotationTimer {
    /// Start rotating through `len` slots, advancing once per `period`.
    ///
    /// The first advance happens one full period after the call. With fewer
    /// than two slots the index stays at 0 and no ticks are scheduled.
    ///
    /// Must be called within a Tokio runtime.
    pub fn spawn(period: Duration, len: usize) -> RotationHandle {
        let (tx, rx) = watch::channel(0usize);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let start = Instant::now() + period;
        let join = tokio::spawn(async move {
            if len < 2 {
                token.cancelled().await;
                return;
            }

            let mut ticker = interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        tx.send_modify(|index| *index = (*index + 1) % len);
                    }
                    () = token.cancelled() => {
                        debug!("Rotation timer stopped");
                        break;
                    }
                }
            }
        });

        RotationHandle {
            index: rx,
            cancel,
            join: Some(join),
        }
    }
}

/// Owner handle for a running rotation. Dropping it stops the rotation.
#[derive(Debug)]
pub struct RotationHandle {
    index: watch::Receiver<usize>,
    cancel: CancellationToken,
    join: Option<JoinHandle<()>>,
}

impl RotationHandle {
    /// Current slot.
    pub fn current(&self) -> usize {
        *self.index.borrow()
    }

    /// Receiver that observes every advance.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Stop advancing. The index keeps its last value.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Stop and wait for the task to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
