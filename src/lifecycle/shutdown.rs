//! Shutdown coordination for the development server.

use tokio::sync::{broadcast, watch};

/// Coordinator for graceful shutdown.
///
/// Carries two gates: a broadcast channel that tells long-running tasks to
/// begin shutting down, and a watch flag that is raised once the HTTP
/// server has fully stopped. The takeover listener needs the second gate:
/// it must not acknowledge a handshake until the HTTP port is actually free.
#[derive(Clone)]
pub struct Shutdown {
    /// "Begin shutting down" broadcast.
    trigger_tx: broadcast::Sender<()>,
    /// "The server lifecycle has ended" flag.
    stopped_tx: watch::Sender<bool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (trigger_tx, _) = broadcast::channel(1);
        let (stopped_tx, _) = watch::channel(false);
        Self {
            trigger_tx,
            stopped_tx,
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.trigger_tx.subscribe()
    }

    /// Trigger the shutdown signal. Idempotent; safe with no subscribers.
    pub fn trigger(&self) {
        let _ = self.trigger_tx.send(());
    }

    /// Record that the server lifecycle has fully ended.
    pub fn mark_stopped(&self) {
        let _ = self.stopped_tx.send(true);
    }

    /// Wait until [`mark_stopped`](Self::mark_stopped) has been called.
    ///
    /// Returns immediately if it already has.
    pub async fn stopped(&self) {
        let mut rx = self.stopped_tx.subscribe();
        let _ = rx.wait_for(|stopped| *stopped).await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
