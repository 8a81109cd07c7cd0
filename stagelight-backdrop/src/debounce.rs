//! Quiet-period debouncer
//!
//! Coalesces bursts of signals and runs the action only once the signals
//! have been quiet for the configured settle time. Pending work is
//! discarded on teardown, so a destroyed owner never gets a late
//! callback.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Debounced action runner
///
/// `signal` is cheap and non-blocking; the action runs on a background
/// task after `quiet` has elapsed with no further signals. Dropping the
/// debouncer cancels both the task and any pending execution.
pub struct Debouncer {
    tx: mpsc::UnboundedSender<()>,
    cancel: CancellationToken,
}

impl Debouncer {
    pub fn new<F>(quiet: Duration, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            'idle: loop {
                // Wait for the first signal of a burst.
                tokio::select! {
                    _ = token.cancelled() => break,
                    first = rx.recv() => {
                        if first.is_none() {
                            break;
                        }
                    }
                }

                // Restart the quiet timer on every further signal.
                loop {
                    tokio::select! {
                        _ = token.cancelled() => break 'idle,
                        more = rx.recv() => {
                            if more.is_none() {
                                break 'idle;
                            }
                        }
                        _ = tokio::time::sleep(quiet) => {
                            action();
                            continue 'idle;
                        }
                    }
                }
            }
        });

        Self { tx, cancel }
    }

    /// Record one occurrence of the debounced event.
    pub fn signal(&self) {
        let _ = self.tx.send(());
    }

    /// Cancel the background task and any pending execution.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
