pub mod account_service;
pub mod favorites_service;
pub mod id_allocator;
pub mod outcome;
pub mod producer_propagation;
pub mod product_sync_service;
pub mod seller_sync_service;
pub mod subscriptions;
pub mod sync_scheduler;

pub use account_service::{AccountService, NewAccount};
pub use favorites_service::FavoritesService;
pub use id_allocator::IdAllocator;
pub use outcome::SyncOutcome;
pub use producer_propagation::ProducerRenamePropagator;
pub use product_sync_service::ProductSyncService;
pub use seller_sync_service::SellerSyncService;
pub use subscriptions::{FavoritesWatch, OwnerCatalogWatch, ProductWatch};
pub use sync_scheduler::{SyncScheduler, SyncStatus};
