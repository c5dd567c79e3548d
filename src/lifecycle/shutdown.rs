//! Shutdown coordination for background tasks.

use tokio::sync::broadcast;

/// Broadcast-based shutdown signal.
///
/// The router holds the sender; the prober loop (and any future background
/// task) holds a receiver and exits when the signal fires. Triggering is
/// idempotent and safe from any task.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the shutdown signal. A send error only means no task is
    /// listening anymore, which is fine.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of tasks still subscribed.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
