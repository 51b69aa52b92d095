use crate::application::ports::password_hasher::PasswordHasher;
use crate::application::ports::remote_catalog::{
    RemoteCatalogClient, RemoteError, RemoteWrite, SellerPatch,
};
use crate::application::ports::repositories::{
    FavoriteRepository, ProductRepository, SellerRepository, StoreEvent, UserRepository,
};
use crate::domain::entities::{Favorite, Product, Seller, User};
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use mockall::mock;
use tokio::sync::broadcast;

mock! {
    pub RemoteCatalog {}

    #[async_trait]
    impl RemoteCatalogClient for RemoteCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, RemoteError>;
        async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RemoteError>;
        async fn create_product(&self, product: &Product) -> Result<Product, RemoteError>;
        async fn update_product(&self, product: &Product) -> Result<Product, RemoteError>;
        async fn delete_product(&self, id: ProductId) -> Result<u16, RemoteError>;

        async fn list_sellers(&self) -> Result<Vec<Seller>, RemoteError>;
        async fn get_seller(&self, id: UserId) -> Result<Option<Seller>, RemoteError>;
        async fn create_seller(&self, seller: &Seller) -> Result<Seller, RemoteError>;
        async fn patch_seller(
            &self,
            id: UserId,
            patch: &SellerPatch,
        ) -> Result<RemoteWrite<Seller>, RemoteError>;
        async fn put_seller(
            &self,
            id: UserId,
            patch: &SellerPatch,
        ) -> Result<RemoteWrite<Seller>, RemoteError>;
        async fn find_sellers_by_email(&self, email: &str) -> Result<Vec<Seller>, RemoteError>;

        async fn create_user(&self, user: &User) -> Result<User, RemoteError>;
        async fn update_user(&self, user: &User) -> Result<User, RemoteError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
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
}

mock! {
    pub SellerRepo {}

    #[async_trait]
    impl SellerRepository for SellerRepo {
        async fn get(&self, id: UserId) -> Result<Option<Seller>, AppError>;
        async fn list_all(&self) -> Result<Vec<Seller>, AppError>;
        async fn upsert(&self, seller: &Seller) -> Result<(), AppError>;
        async fn upsert_with_promotion(&self, seller: &Seller) -> Result<(), AppError>;
        async fn delete(&self, id: UserId) -> Result<(), AppError>;
        fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get(&self, id: UserId) -> Result<Option<User>, AppError>;
        async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn upsert(&self, user: &User) -> Result<(), AppError>;
        async fn delete(&self, id: UserId) -> Result<(), AppError>;
        fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent>;
    }
}

mock! {
    pub FavoriteRepo {}

    #[async_trait]
    impl FavoriteRepository for FavoriteRepo {
        async fn add(&self, favorite: &Favorite) -> Result<(), AppError>;
        async fn remove(&self, user: UserId, product: ProductId) -> Result<(), AppError>;
        async fn list_for_user(&self, user: UserId) -> Result<Vec<Favorite>, AppError>;
        async fn products_for_user(&self, user: UserId) -> Result<Vec<Product>, AppError>;
        fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent>;
    }
}

mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash(&self, plaintext: &str) -> Result<String, AppError>;
        fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AppError>;
    }
}
