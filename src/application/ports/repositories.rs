use crate::domain::entities::{Favorite, Product, Seller, User};
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Announcement of a committed local write. Reactive read paths subscribe
/// to these and re-query the store when a relevant key changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    ProductChanged(ProductId),
    ProductRemoved(ProductId),
    SellerChanged(UserId),
    UserChanged(UserId),
    FavoritesChanged(UserId),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, AppError>;
    async fn list_all(&self) -> Result<Vec<Product>, AppError>;
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Product>, AppError>;
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, AppError>;
    async fn list_by_city(&self, city: &str) -> Result<Vec<Product>, AppError>;
    async fn search_by_producer(&self, query: &str) -> Result<Vec<Product>, AppError>;
    async fn upsert(&self, product: &Product) -> Result<(), AppError>;
    async fn delete(&self, id: ProductId) -> Result<(), AppError>;
    async fn bulk_upsert(&self, products: &[Product]) -> Result<(), AppError>;
    fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent>;
}

#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn get(&self, id: UserId) -> Result<Option<Seller>, AppError>;
    async fn list_all(&self) -> Result<Vec<Seller>, AppError>;
    async fn upsert(&self, seller: &Seller) -> Result<(), AppError>;
    /// Upserts the seller row and flips the owning user's role to SELLER in
    /// one transaction, so a crash between the two writes cannot leave a
    /// seller owned by a CLIENT user.
    async fn upsert_with_promotion(&self, seller: &Seller) -> Result<(), AppError>;
    async fn delete(&self, id: UserId) -> Result<(), AppError>;
    fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, id: UserId) -> Result<Option<User>, AppError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn upsert(&self, user: &User) -> Result<(), AppError>;
    async fn delete(&self, id: UserId) -> Result<(), AppError>;
    fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent>;
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Replace-on-conflict: re-adding an existing pair is not an error.
    async fn add(&self, favorite: &Favorite) -> Result<(), AppError>;
    /// Removing an absent pair is a no-op.
    async fn remove(&self, user: UserId, product: ProductId) -> Result<(), AppError>;
    async fn list_for_user(&self, user: UserId) -> Result<Vec<Favorite>, AppError>;
    /// Join of favorite rows against products, filtered by user.
    async fn products_for_user(&self, user: UserId) -> Result<Vec<Product>, AppError>;
    fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent>;
}
