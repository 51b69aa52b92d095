use crate::domain::entities::{Product, Seller, User};
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a remote catalog call, split the only way the coordinators
/// care about: the service could not be reached at all, or it answered
/// with a non-2xx response.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Remote service unreachable: {0}")]
    Unavailable(String),

    #[error("Remote service rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<RemoteError> for AppError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Unavailable(msg) => AppError::RemoteUnavailable(msg),
            RemoteError::Rejected { status, body } => AppError::RemoteRejected { status, body },
        }
    }
}

/// Outcome of a PATCH/PUT write. The status is handed back raw so callers
/// can run a fallback ladder on non-2xx instead of taking an error path.
#[derive(Debug, Clone)]
pub struct RemoteWrite<T> {
    pub status: u16,
    pub body: Option<T>,
}

impl<T> RemoteWrite<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Partial seller payload for PATCH/PUT. Unset fields are omitted from the
/// serialized body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrepreneurship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl From<&Seller> for SellerPatch {
    fn from(seller: &Seller) -> Self {
        Self {
            name: Some(seller.name.clone()),
            lastname: Some(seller.lastname.clone()),
            email: Some(seller.email.clone()),
            phone: seller.phone.clone(),
            address: seller.address.clone(),
            entrepreneurship: Some(seller.entrepreneurship.clone()),
            photo_url: seller.photo_url.clone(),
            latitude: seller.latitude,
            longitude: seller.longitude,
        }
    }
}

/// Typed client for the remote authoritative catalog service.
///
/// `get_*` return `Ok(None)` on 404. `create_*` honor a caller-assigned id
/// when the entity carries one. Timeout policy lives in the implementation.
#[async_trait]
pub trait RemoteCatalogClient: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, RemoteError>;
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RemoteError>;
    async fn create_product(&self, product: &Product) -> Result<Product, RemoteError>;
    async fn update_product(&self, product: &Product) -> Result<Product, RemoteError>;
    /// Returns the response status; callers decide what a 404 means.
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
