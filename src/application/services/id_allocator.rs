use crate::application::ports::remote_catalog::RemoteCatalogClient;
use crate::domain::value_objects::ProductId;
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

/// Derives the next usable product identifier. Non-transactional by
/// design: two offline callers can collide, and the collision is accepted
/// in exchange for not needing a reservation protocol.
pub struct IdAllocator {
    remote: Arc<dyn RemoteCatalogClient>,
}

impl IdAllocator {
    pub fn new(remote: Arc<dyn RemoteCatalogClient>) -> Self {
        Self { remote }
    }

    /// Highest remote id plus one; a wall-clock stand-in when the remote
    /// list cannot be fetched. Bounded by the remote client's own timeout.
    pub async fn next_product_id(&self) -> ProductId {
        match self.remote.list_products().await {
            Ok(products) => {
                let max = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
                ProductId::new(max + 1)
            }
            Err(err) => {
                warn!("Remote id allocation failed, using wall-clock id: {err}");
                ProductId::new(Self::wall_clock_id())
            }
        }
    }

    /// Current time in milliseconds modulo 1_000_000, clamped away from
    /// zero so an unassigned id can never be produced.
    pub fn wall_clock_id() -> i64 {
        (Utc::now().timestamp_millis() % 1_000_000).max(1)
    }
}
