//! Async driver for the rotation state machine
//!
//! Owns the rotation timer and the ended-signal channel, and applies their
//! transitions to a shared `Rotator`. The driver task runs until its
//! cancellation token fires; dropping the handle cancels it, which is what
//! tears the timer down when the owning view goes away. Leaked timers
//! would keep mutating state nobody reads while holding the player alive,
//! so cancellation on teardown is a requirement, not tidiness.

use crate::rotator::{Rotator, TickEffect};
use crate::video::Video;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Playback collaborator as seen by the driver
///
/// The driver never renders; it only issues restart commands. The ended
/// signal travels the other way, through `RotatorHandle::notify_ended`.
pub trait PlayerControl: Send + Sync {
    /// Seek the current video back to its start.
    fn seek_to_start(&self);
}

/// Spawns and owns the rotation task
pub struct RotatorDriver;

impl RotatorDriver {
    /// Start rotating. The returned handle is the only way to observe or
    /// signal the rotator; dropping it stops the task.
    pub fn spawn(rotator: Rotator, player: Arc<dyn PlayerControl>) -> RotatorHandle {
        let interval = rotator.interval();
        let shared = Arc::new(Mutex::new(rotator));
        let (ended_tx, mut ended_rx) = mpsc::channel::<()>(8);
        let cancel = CancellationToken::new();

        let task_rotator = Arc::clone(&shared);
        let task_cancel = cancel.clone();
        // First tick fires one full interval after spawn, not immediately.
        // Anchored here rather than in the task so the deadline does not
        // drift by the gap before the task is first polled.
        let start = tokio::time::Instant::now() + interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(start, interval);

            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => {
                        debug!("Rotator driver stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let effect = {
                            let mut rotator = task_rotator.lock().unwrap();
                            rotator.tick()
                        };
                        trace!("Rotation tick: {:?}", effect);
                        if effect == TickEffect::Restart {
                            player.seek_to_start();
                        }
                    }
                    signal = ended_rx.recv() => {
                        match signal {
                            Some(()) => {
                                let effect = {
                                    let mut rotator = task_rotator.lock().unwrap();
                                    rotator.on_ended()
                                };
                                trace!("Media ended: {:?}", effect);
                            }
                            // All handles gone; cancellation follows.
                            None => break,
                        }
                    }
                }
            }
        });

        RotatorHandle {
            rotator: shared,
            ended_tx,
            cancel,
        }
    }
}

/// Handle to a running rotation task
pub struct RotatorHandle {
    rotator: Arc<Mutex<Rotator>>,
    ended_tx: mpsc::Sender<()>,
    cancel: CancellationToken,
}

impl RotatorHandle {
    /// Currently selected video, recomputed on every call.
    pub fn current_video(&self) -> Option<Video> {
        self.rotator.lock().unwrap().current_video()
    }

    pub fn current_index(&self) -> usize {
        self.rotator.lock().unwrap().current_index()
    }

    /// Report that the current video finished naturally.
    ///
    /// Best-effort: if the driver is shutting down or the signal buffer is
    /// full, the signal is dropped — the timer covers rotation anyway.
    pub fn notify_ended(&self) {
        let _ = self.ended_tx.try_send(());
    }

    /// Stop the driver task. Also happens on drop.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for RotatorHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
