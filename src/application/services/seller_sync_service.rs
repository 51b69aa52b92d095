use super::producer_propagation::ProducerRenamePropagator;
use super::product_sync_service::ProductSyncService;
use crate::application::ports::remote_catalog::{
    RemoteCatalogClient, RemoteWrite, SellerPatch,
};
use crate::application::ports::repositories::SellerRepository;
use crate::domain::entities::{Seller, User};
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

/// Coordinator for the seller lifecycle: user promotion, profile edits
/// with the PATCH->PUT fallback ladder, and the bulk pull from the remote
/// seller list.
///
/// Unlike products, a failed remote profile write performs no local write:
/// sellers are discoverable by other users, so their profile must not
/// silently diverge from the remote one.
pub struct SellerSyncService {
    remote: Arc<dyn RemoteCatalogClient>,
    sellers: Arc<dyn SellerRepository>,
    propagator: ProducerRenamePropagator,
}

impl SellerSyncService {
    pub fn new(
        remote: Arc<dyn RemoteCatalogClient>,
        sellers: Arc<dyn SellerRepository>,
        products: Arc<ProductSyncService>,
    ) -> Self {
        Self {
            remote,
            sellers,
            propagator: ProducerRenamePropagator::new(products),
        }
    }

    /// Registers `user` as a seller under their own id. The remote call is
    /// fail-fast: nothing is written locally unless the remote accepted the
    /// seller. On success the seller upsert and the CLIENT->SELLER role
    /// flip commit in one store transaction.
    ///
    /// Remote existence is probed by scanning the seller list; the remote
    /// API is not trusted to distinguish a 404 from an empty filter result.
    pub async fn convert_to_seller(
        &self,
        user: &User,
        entrepreneurship: &str,
        address: &str,
    ) -> Result<Seller, AppError> {
        let seller = Seller::for_user(user, entrepreneurship.to_string(), address.to_string());

        let remote_sellers = self.remote.list_sellers().await?;
        let confirmed = if remote_sellers.iter().any(|s| s.user_id == user.id) {
            let patch = SellerPatch::from(&seller);
            let write = self.remote.patch_seller(user.id, &patch).await?;
            if !write.is_success() {
                return Err(AppError::RemoteRejected {
                    status: write.status,
                    body: "Seller patch rejected".to_string(),
                });
            }
            write.body.unwrap_or(seller)
        } else {
            // The remote store must honor the caller-assigned id here.
            self.remote.create_seller(&seller).await?
        };

        self.sellers.upsert_with_promotion(&confirmed).await?;
        info!("User {} promoted to seller", user.id);
        Ok(confirmed)
    }

    /// Saves a seller profile edit. When the remote point lookup cannot see
    /// the seller, the edit is refused outright and the local store is left
    /// untouched. When the save succeeds and the entrepreneurship name
    /// changed, the rename is propagated to the seller's products before
    /// returning.
    pub async fn update_seller(&self, seller: &Seller) -> Result<Seller, AppError> {
        match self.remote.get_seller(seller.user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(AppError::NotFoundRemotely(format!(
                    "Seller {} does not exist remotely",
                    seller.user_id
                )));
            }
            Err(err) => return Err(err.into()),
        }

        let previous = self.sellers.get(seller.user_id).await?;

        let patch = SellerPatch::from(seller);
        let write = match self.remote.patch_seller(seller.user_id, &patch).await {
            Ok(write) if write.is_success() => write,
            Ok(write) => {
                warn!(
                    "Seller PATCH returned {}, falling back to PUT",
                    write.status
                );
                self.put_fallback(seller, &patch).await?
            }
            Err(err) => {
                warn!("Seller PATCH failed, falling back to PUT: {err}");
                self.put_fallback(seller, &patch).await?
            }
        };

        let confirmed = write.body.unwrap_or_else(|| seller.clone());
        self.sellers.upsert(&confirmed).await?;

        let renamed = previous
            .map(|p| p.entrepreneurship != confirmed.entrepreneurship)
            .unwrap_or(false);
        if renamed {
            self.propagator
                .propagate(confirmed.user_id, &confirmed.entrepreneurship)
                .await?;
        }

        Ok(confirmed)
    }

    async fn put_fallback(
        &self,
        seller: &Seller,
        patch: &SellerPatch,
    ) -> Result<RemoteWrite<Seller>, AppError> {
        let write = self.remote.put_seller(seller.user_id, patch).await?;
        if !write.is_success() {
            return Err(AppError::RemoteRejected {
                status: write.status,
                body: "Seller PUT rejected".to_string(),
            });
        }
        Ok(write)
    }

    /// Pulls the full remote seller list into the local store. One bad
    /// record does not abort the batch; per-seller failures are logged and
    /// tallied. The remote list is returned regardless of local outcomes.
    pub async fn sync_sellers(&self) -> Result<Vec<Seller>, AppError> {
        let remote_sellers = self.remote.list_sellers().await?;

        let mut inserted = 0u32;
        let mut updated = 0u32;
        let mut failed = 0u32;
        for seller in &remote_sellers {
            let existing = match self.sellers.get(seller.user_id).await {
                Ok(found) => found.is_some(),
                Err(err) => {
                    warn!("Skipping seller {}: {err}", seller.user_id);
                    failed += 1;
                    continue;
                }
            };
            match self.sellers.upsert(seller).await {
                Ok(()) => {
                    if existing {
                        updated += 1;
                    } else {
                        inserted += 1;
                    }
                }
                Err(err) => {
                    warn!("Failed to store seller {}: {err}", seller.user_id);
                    failed += 1;
                }
            }
        }

        info!("Seller sync: {inserted} inserted, {updated} updated, {failed} failed");
        Ok(remote_sellers)
    }

    /// Server-side email filter first; when it comes back empty, the full
    /// list is fetched and filtered here, case-insensitively. The filter
    /// endpoint is not trusted to be implemented on every deployment.
    pub async fn seller_by_email(&self, email: &str) -> Result<Option<Seller>, AppError> {
        let direct = self.remote.find_sellers_by_email(email).await?;
        if let Some(seller) = direct.into_iter().next() {
            return Ok(Some(seller));
        }

        let all = self.remote.list_sellers().await?;
        Ok(all
            .into_iter()
            .find(|s| s.email.eq_ignore_ascii_case(email)))
    }

    pub async fn local_seller(&self, user: &User) -> Result<Option<Seller>, AppError> {
        self.sellers.get(user.id).await
    }
}
