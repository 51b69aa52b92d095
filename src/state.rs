use crate::application::services::{
    AccountService, FavoritesService, ProductSyncService, SellerSyncService, SyncScheduler,
};
use crate::infrastructure::crypto::Argon2PasswordHasher;
use crate::infrastructure::database::{ConnectionPool, SqliteCatalogStore};
use crate::infrastructure::remote::HttpCatalogClient;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Composition root: wires the SQLite store, the HTTP catalog client and
/// the coordinators together for an embedding client shell.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductSyncService>,
    pub sellers: Arc<SellerSyncService>,
    pub favorites: Arc<FavoritesService>,
    pub accounts: Arc<AccountService>,
    pub scheduler: Arc<SyncScheduler>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(AppError::Configuration)?;

        let pool =
            ConnectionPool::new(&config.database.url, config.database.max_connections).await?;
        pool.migrate().await?;

        let store = Arc::new(SqliteCatalogStore::new(pool));
        let remote = Arc::new(HttpCatalogClient::new(&config.remote)?);
        let hasher = Arc::new(Argon2PasswordHasher::new());

        let products = Arc::new(ProductSyncService::new(
            remote.clone(),
            store.clone(),
            store.clone(),
        ));
        let sellers = Arc::new(SellerSyncService::new(
            remote.clone(),
            store.clone(),
            products.clone(),
        ));
        let favorites = Arc::new(FavoritesService::new(store.clone()));
        let accounts = Arc::new(AccountService::new(remote, store, hasher));

        let scheduler = Arc::new(SyncScheduler::new(products.clone(), sellers.clone()));
        if config.sync.auto_sync {
            scheduler.schedule(config.sync.sync_interval);
        }

        Ok(Self {
            products,
            sellers,
            favorites,
            accounts,
            scheduler,
        })
    }
}
