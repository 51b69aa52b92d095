use super::product_sync_service::ProductSyncService;
use super::seller_sync_service::SellerSyncService;
use crate::shared::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SyncStatus {
    pub is_syncing: bool,
    pub last_sync: Option<i64>,
    pub merged_products: u32,
    pub merged_sellers: u32,
    pub sync_errors: u32,
}

/// Periodic best-effort resynchronization of the whole catalog. Concurrent
/// `run_once` calls coalesce on the `is_syncing` flag.
pub struct SyncScheduler {
    products: Arc<ProductSyncService>,
    sellers: Arc<SellerSyncService>,
    status: Arc<RwLock<SyncStatus>>,
}

impl SyncScheduler {
    pub fn new(products: Arc<ProductSyncService>, sellers: Arc<SellerSyncService>) -> Self {
        Self {
            products,
            sellers,
            status: Arc::new(RwLock::new(SyncStatus::default())),
        }
    }

    pub async fn run_once(&self) -> Result<(), AppError> {
        {
            let mut status = self.status.write().await;
            if status.is_syncing {
                return Ok(());
            }
            status.is_syncing = true;
        }

        let result = self.refresh().await;

        let mut status = self.status.write().await;
        status.is_syncing = false;
        match result {
            Ok((merged_products, merged_sellers)) => {
                status.last_sync = Some(Utc::now().timestamp());
                status.merged_products = merged_products;
                status.merged_sellers = merged_sellers;
                Ok(())
            }
            Err(err) => {
                status.sync_errors += 1;
                Err(err)
            }
        }
    }

    async fn refresh(&self) -> Result<(u32, u32), AppError> {
        let merged_products = self.products.pull_and_merge_all().await? as u32;
        let merged_sellers = self.sellers.sync_sellers().await?.len() as u32;
        Ok((merged_products, merged_sellers))
    }

    pub async fn status(&self) -> SyncStatus {
        self.status.read().await.clone()
    }

    pub fn schedule(&self, interval_secs: u64) {
        let scheduler = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            // The first tick completes immediately; skip it so the caller
            // controls when the initial sync happens.
            interval.tick().await;

            loop {
                interval.tick().await;
                if let Err(err) = scheduler.run_once().await {
                    error!("Scheduled catalog sync failed: {err}");
                }
            }
        });
    }
}

impl Clone for SyncScheduler {
    fn clone(&self) -> Self {
        Self {
            products: self.products.clone(),
            sellers: self.sellers.clone(),
            status: self.status.clone(),
        }
    }
}
