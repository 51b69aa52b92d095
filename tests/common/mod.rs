#![allow(dead_code)]

use async_trait::async_trait;
use mercadito_lib::application::ports::remote_catalog::{
    RemoteCatalogClient, RemoteError, RemoteWrite, SellerPatch,
};
use mercadito_lib::application::services::{
    AccountService, FavoritesService, ProductSyncService, SellerSyncService,
};
use mercadito_lib::domain::entities::{Product, Seller, User};
use mercadito_lib::domain::value_objects::{ProductId, UserId};
use mercadito_lib::infrastructure::crypto::Argon2PasswordHasher;
use mercadito_lib::infrastructure::database::{ConnectionPool, SqliteCatalogStore};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the remote catalog service. Flip `offline` to
/// simulate an unreachable authority; flip `reject_patch` to make PATCH
/// answer 405 so the PUT fallback gets exercised.
#[derive(Default)]
pub struct FakeRemoteCatalog {
    pub products: Mutex<HashMap<i64, Product>>,
    pub sellers: Mutex<HashMap<i64, Seller>>,
    pub users: Mutex<HashMap<i64, User>>,
    pub offline: AtomicBool,
    pub reject_patch: AtomicBool,
}

impl FakeRemoteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_reject_patch(&self, reject: bool) {
        self.reject_patch.store(reject, Ordering::SeqCst);
    }

    fn check_reachable(&self) -> Result<(), RemoteError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(RemoteError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn apply_patch(seller: &mut Seller, patch: &SellerPatch) {
        if let Some(name) = &patch.name {
            seller.name = name.clone();
        }
        if let Some(lastname) = &patch.lastname {
            seller.lastname = lastname.clone();
        }
        if let Some(email) = &patch.email {
            seller.email = email.clone();
        }
        if patch.phone.is_some() {
            seller.phone = patch.phone.clone();
        }
        if patch.address.is_some() {
            seller.address = patch.address.clone();
        }
        if let Some(entrepreneurship) = &patch.entrepreneurship {
            seller.entrepreneurship = entrepreneurship.clone();
        }
        if patch.photo_url.is_some() {
            seller.photo_url = patch.photo_url.clone();
        }
        if patch.latitude.is_some() {
            seller.latitude = patch.latitude;
        }
        if patch.longitude.is_some() {
            seller.longitude = patch.longitude;
        }
    }
}

#[async_trait]
impl RemoteCatalogClient for FakeRemoteCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, RemoteError> {
        self.check_reachable()?;
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RemoteError> {
        self.check_reachable()?;
        Ok(self.products.lock().unwrap().get(&id.get()).cloned())
    }

    async fn create_product(&self, product: &Product) -> Result<Product, RemoteError> {
        self.check_reachable()?;
        self.products
            .lock()
            .unwrap()
            .insert(product.id.get(), product.clone());
        Ok(product.clone())
    }

    async fn update_product(&self, product: &Product) -> Result<Product, RemoteError> {
        self.check_reachable()?;
        let mut products = self.products.lock().unwrap();
        if !products.contains_key(&product.id.get()) {
            return Err(RemoteError::Rejected {
                status: 404,
                body: "no such product".to_string(),
            });
        }
        products.insert(product.id.get(), product.clone());
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<u16, RemoteError> {
        self.check_reachable()?;
        let removed = self.products.lock().unwrap().remove(&id.get());
        Ok(if removed.is_some() { 204 } else { 404 })
    }

    async fn list_sellers(&self) -> Result<Vec<Seller>, RemoteError> {
        self.check_reachable()?;
        Ok(self.sellers.lock().unwrap().values().cloned().collect())
    }

    async fn get_seller(&self, id: UserId) -> Result<Option<Seller>, RemoteError> {
        self.check_reachable()?;
        Ok(self.sellers.lock().unwrap().get(&id.get()).cloned())
    }

    async fn create_seller(&self, seller: &Seller) -> Result<Seller, RemoteError> {
        self.check_reachable()?;
        self.sellers
            .lock()
            .unwrap()
            .insert(seller.user_id.get(), seller.clone());
        Ok(seller.clone())
    }

    async fn patch_seller(
        &self,
        id: UserId,
        patch: &SellerPatch,
    ) -> Result<RemoteWrite<Seller>, RemoteError> {
        self.check_reachable()?;
        if self.reject_patch.load(Ordering::SeqCst) {
            return Ok(RemoteWrite {
                status: 405,
                body: None,
            });
        }
        let mut sellers = self.sellers.lock().unwrap();
        match sellers.get_mut(&id.get()) {
            Some(seller) => {
                Self::apply_patch(seller, patch);
                Ok(RemoteWrite {
                    status: 200,
                    body: Some(seller.clone()),
                })
            }
            None => Ok(RemoteWrite {
                status: 404,
                body: None,
            }),
        }
    }

    async fn put_seller(
        &self,
        id: UserId,
        patch: &SellerPatch,
    ) -> Result<RemoteWrite<Seller>, RemoteError> {
        self.check_reachable()?;
        let mut sellers = self.sellers.lock().unwrap();
        match sellers.get_mut(&id.get()) {
            Some(seller) => {
                Self::apply_patch(seller, patch);
                Ok(RemoteWrite {
                    status: 200,
                    body: Some(seller.clone()),
                })
            }
            None => Ok(RemoteWrite {
                status: 404,
                body: None,
            }),
        }
    }

    async fn find_sellers_by_email(&self, email: &str) -> Result<Vec<Seller>, RemoteError> {
        self.check_reachable()?;
        Ok(self
            .sellers
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.email == email)
            .cloned()
            .collect())
    }

    async fn create_user(&self, user: &User) -> Result<User, RemoteError> {
        self.check_reachable()?;
        let mut users = self.users.lock().unwrap();
        let next_id = users.keys().max().copied().unwrap_or(0) + 1;
        let mut confirmed = user.clone();
        confirmed.assign_id(UserId::new(next_id));
        users.insert(next_id, confirmed.clone());
        Ok(confirmed)
    }

    async fn update_user(&self, user: &User) -> Result<User, RemoteError> {
        self.check_reachable()?;
        self.users
            .lock()
            .unwrap()
            .insert(user.id.get(), user.clone());
        Ok(user.clone())
    }
}

pub struct TestHarness {
    pub remote: Arc<FakeRemoteCatalog>,
    pub store: Arc<SqliteCatalogStore>,
    pub products: Arc<ProductSyncService>,
    pub sellers: Arc<SellerSyncService>,
    pub favorites: Arc<FavoritesService>,
    pub accounts: Arc<AccountService>,
}

pub async fn harness() -> TestHarness {
    let pool = ConnectionPool::in_memory()
        .await
        .expect("failed to create pool");
    pool.migrate().await.expect("failed to apply migrations");

    let remote = Arc::new(FakeRemoteCatalog::new());
    let store = Arc::new(SqliteCatalogStore::new(pool));

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
    let accounts = Arc::new(AccountService::new(
        remote.clone(),
        store.clone(),
        Arc::new(Argon2PasswordHasher::new()),
    ));

    TestHarness {
        remote,
        store,
        products,
        sellers,
        favorites,
        accounts,
    }
}

pub fn sample_product(name: &str, owner: Option<i64>) -> Product {
    let mut product = Product::new(
        name.to_string(),
        "Locally made".to_string(),
        "Typed-by-caller".to_string(),
        "Food".to_string(),
        vec!["front.jpg".to_string()],
        Decimal::new(1490, 2),
        "Valparaiso".to_string(),
    );
    product.owner_id = owner.map(UserId::new);
    product
}

pub fn sample_user(id: i64, email: &str) -> User {
    let mut user = User::new(
        "Ana".to_string(),
        "Rojas".to_string(),
        email.to_string(),
        "digest".to_string(),
    );
    user.assign_id(UserId::new(id));
    user
}

pub fn sample_seller(id: i64, entrepreneurship: &str) -> Seller {
    Seller {
        user_id: UserId::new(id),
        name: "Ana".to_string(),
        lastname: "Rojas".to_string(),
        email: format!("seller{id}@example.com"),
        phone: None,
        address: Some("Calle Larga 12".to_string()),
        entrepreneurship: entrepreneurship.to_string(),
        photo_url: None,
        latitude: None,
        longitude: None,
    }
}
