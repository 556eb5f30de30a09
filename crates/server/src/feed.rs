use log::debug;
use repograph_protocol::HighlightUpdate;
use tokio::sync::broadcast;

/// Fan-out channel carrying highlight changes to every viewer task.
///
/// The per-connection receivers are the connection registry: subscribing
/// registers a viewer for future updates, dropping the receiver deregisters
/// it. Publishing never blocks the command context and never waits for
/// per-viewer acknowledgement.
#[derive(Clone)]
pub struct HighlightFeed {
    update_tx: broadcast::Sender<HighlightUpdate>,
}

impl HighlightFeed {
    pub fn new(capacity: usize) -> Self {
        let (update_tx, _) = broadcast::channel(capacity);
        Self { update_tx }
    }

    /// Hand off a selection change for delivery.
    ///
    /// With no connected viewers the update is simply dropped, not queued
    /// for replay: the INIT snapshot reconciles any viewer that connects
    /// later.
    pub fn publish(&self, highlighted: Vec<String>) {
        if self.update_tx.send(HighlightUpdate { highlighted }).is_err() {
            debug!("No connected viewers; highlight update dropped");
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HighlightUpdate> {
        self.update_tx.subscribe()
    }

    /// Number of live viewer subscriptions.
    #[must_use]
    pub fn viewer_count(&self) -> usize {
        self.update_tx.receiver_count()
    }
}
