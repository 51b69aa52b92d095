use super::id_allocator::IdAllocator;
use super::outcome::SyncOutcome;
use super::subscriptions::{OwnerCatalogWatch, ProductWatch};
use crate::application::ports::remote_catalog::RemoteCatalogClient;
use crate::application::ports::repositories::{ProductRepository, SellerRepository};
use crate::domain::entities::Product;
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

/// Write-through coordinator for products: every mutation goes to the
/// remote authority first and is then mirrored locally; a remote failure
/// degrades to a local-only commit instead of surfacing as an error.
pub struct ProductSyncService {
    remote: Arc<dyn RemoteCatalogClient>,
    products: Arc<dyn ProductRepository>,
    sellers: Arc<dyn SellerRepository>,
    allocator: IdAllocator,
}

impl ProductSyncService {
    pub fn new(
        remote: Arc<dyn RemoteCatalogClient>,
        products: Arc<dyn ProductRepository>,
        sellers: Arc<dyn SellerRepository>,
    ) -> Self {
        let allocator = IdAllocator::new(remote.clone());
        Self {
            remote,
            products,
            sellers,
            allocator,
        }
    }

    /// Creation never fails for remote reasons: the caller always receives
    /// a persisted product, and the outcome variant records whether the
    /// remote authority confirmed it. Later sync passes reconcile
    /// local-only rows.
    pub async fn create_with_sync(
        &self,
        mut product: Product,
    ) -> Result<SyncOutcome<Product>, AppError> {
        product.validate().map_err(AppError::Validation)?;

        // The denormalized producer name always follows the seller record,
        // not whatever the caller typed.
        if let Some(owner) = product.owner_id {
            if let Some(seller) = self.sellers.get(owner).await? {
                product.rename_producer(&seller.entrepreneurship);
            }
        }

        product.assign_id(self.allocator.next_product_id().await);

        match self.remote.create_product(&product).await {
            Ok(confirmed) => {
                self.products.upsert(&confirmed).await?;
                Ok(SyncOutcome::Synced(confirmed))
            }
            Err(err) => {
                warn!("Remote product create failed, committing locally: {err}");
                product.assign_id(ProductId::new(IdAllocator::wall_clock_id()));
                self.products.upsert(&product).await?;
                Ok(SyncOutcome::LocalOnly(product, err.to_string()))
            }
        }
    }

    /// Returns whether the remote authority confirmed the update; the
    /// local store is written either way.
    pub async fn update_with_sync(&self, product: &Product) -> Result<bool, AppError> {
        let remote_ok = match self.remote.update_product(product).await {
            Ok(_) => true,
            Err(err) => {
                warn!("Remote update of product {} failed: {err}", product.id);
                false
            }
        };
        self.products.upsert(product).await?;
        Ok(remote_ok)
    }

    /// A remote 404 counts as confirmed: deleting an already-deleted
    /// product is treated as idempotent.
    pub async fn delete_with_sync(&self, product: &Product) -> Result<bool, AppError> {
        let remote_ok = match self.remote.delete_product(product.id).await {
            Ok(status) => (200..300).contains(&status) || status == 404,
            Err(err) => {
                warn!("Remote delete of product {} failed: {err}", product.id);
                false
            }
        };
        self.products.delete(product.id).await?;
        Ok(remote_ok)
    }

    /// Best-effort full refresh: remote failure is logged and reported as
    /// zero merged rows, never as an error. Store failures stay fatal.
    pub async fn pull_and_merge_all(&self) -> Result<usize, AppError> {
        let remote_products = match self.remote.list_products().await {
            Ok(list) => list,
            Err(err) => {
                warn!("Catalog refresh skipped, remote list failed: {err}");
                return Ok(0);
            }
        };
        self.products.bulk_upsert(&remote_products).await?;
        info!("Merged {} remote products into local store", remote_products.len());
        Ok(remote_products.len())
    }

    pub async fn by_id(&self, id: ProductId) -> Result<Option<Product>, AppError> {
        self.products.get(id).await
    }

    pub async fn all(&self) -> Result<Vec<Product>, AppError> {
        self.products.list_all().await
    }

    pub async fn by_owner(&self, owner: UserId) -> Result<Vec<Product>, AppError> {
        self.products.list_by_owner(owner).await
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>, AppError> {
        self.products.list_by_category(category).await
    }

    pub async fn by_city(&self, city: &str) -> Result<Vec<Product>, AppError> {
        self.products.list_by_city(city).await
    }

    pub async fn search_by_producer(&self, query: &str) -> Result<Vec<Product>, AppError> {
        self.products.search_by_producer(query).await
    }

    /// Live view of a single product, for detail screens.
    pub fn observe(&self, id: ProductId) -> ProductWatch {
        ProductWatch::new(self.products.clone(), id)
    }

    /// Live view of a seller's catalog, for owner dashboards.
    pub fn observe_owner(&self, owner: UserId) -> OwnerCatalogWatch {
        OwnerCatalogWatch::new(self.products.clone(), owner)
    }
}
