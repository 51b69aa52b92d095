use super::product_sync_service::ProductSyncService;
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use futures::future;
use std::sync::Arc;
use tracing::{info, warn};

/// Fans a seller rename out to the denormalized `producer` field of every
/// product that seller owns, through the product coordinator so each write
/// follows the usual remote-then-local protocol.
pub struct ProducerRenamePropagator {
    products: Arc<ProductSyncService>,
}

impl ProducerRenamePropagator {
    pub fn new(products: Arc<ProductSyncService>) -> Self {
        Self { products }
    }

    /// Returns the number of products rewritten. An empty local catalog for
    /// the owner is a no-op, not a fault. Remote failures are logged per
    /// product and never halt the fan-out; a store failure is fatal.
    pub async fn propagate(&self, owner: UserId, new_producer: &str) -> Result<u32, AppError> {
        let owned = self.products.by_owner(owner).await?;
        if owned.is_empty() {
            info!("No cached products for owner {owner}, nothing to propagate");
            return Ok(0);
        }

        let total = owned.len() as u32;
        // Independent products, independent futures. The same product never
        // appears twice, so no write races with itself.
        let updates = owned.into_iter().map(|mut product| {
            product.rename_producer(new_producer);
            let products = Arc::clone(&self.products);
            async move {
                let synced = products.update_with_sync(&product).await?;
                if !synced {
                    warn!(
                        "Producer rename for product {} committed locally only",
                        product.id
                    );
                }
                Ok::<(), AppError>(())
            }
        });

        for result in future::join_all(updates).await {
            result?;
        }

        info!("Propagated producer rename to {total} products of owner {owner}");
        Ok(total)
    }
}
