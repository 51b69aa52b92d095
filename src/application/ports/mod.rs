pub mod password_hasher;
pub mod remote_catalog;
pub mod repositories;

pub use password_hasher::PasswordHasher;
pub use remote_catalog::{RemoteCatalogClient, RemoteError, RemoteWrite, SellerPatch};
pub use repositories::{
    FavoriteRepository, ProductRepository, SellerRepository, StoreEvent, UserRepository,
};
