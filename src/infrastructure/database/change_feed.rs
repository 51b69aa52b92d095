use crate::application::ports::repositories::StoreEvent;
use tokio::sync::broadcast;

const CHANGE_FEED_CAPACITY: usize = 256;

/// Broadcast channel announcing committed writes. Subscribers that lag past
/// the buffer receive `Lagged` and are expected to re-query.
#[derive(Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<StoreEvent>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self { tx }
    }

    pub fn publish(&self, event: StoreEvent) {
        // A send with no live subscribers is not a fault.
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}
