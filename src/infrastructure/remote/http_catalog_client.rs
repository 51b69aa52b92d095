use crate::application::ports::remote_catalog::{
    RemoteCatalogClient, RemoteError, RemoteWrite, SellerPatch,
};
use crate::domain::entities::{Product, Seller, User};
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::config::RemoteConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed implementation of the remote catalog contract. The
/// request timeout configured here is the only timeout policy in the core.
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|err| AppError::Configuration(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn parse_success<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        response.json::<T>().await.map_err(|err| RemoteError::Rejected {
            status: status.as_u16(),
            body: format!("Unparseable response body: {err}"),
        })
    }

    async fn parse_optional<T: DeserializeOwned>(
        response: Response,
    ) -> Result<Option<T>, RemoteError> {
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse_success(response).await.map(Some)
    }

    /// PATCH/PUT responses keep their status for the caller; only a missing
    /// network path is an error here.
    async fn parse_write<T: DeserializeOwned>(
        response: Response,
    ) -> Result<RemoteWrite<T>, RemoteError> {
        let status = response.status().as_u16();
        let body = if response.status().is_success() {
            response.json::<T>().await.ok()
        } else {
            None
        };
        Ok(RemoteWrite { status, body })
    }

    fn unreachable(err: reqwest::Error) -> RemoteError {
        RemoteError::Unavailable(err.to_string())
    }
}

#[async_trait]
impl RemoteCatalogClient for HttpCatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, RemoteError> {
        let response = self
            .client
            .get(self.url("/products"))
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_success(response).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RemoteError> {
        let response = self
            .client
            .get(self.url(&format!("/products/{id}")))
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_optional(response).await
    }

    async fn create_product(&self, product: &Product) -> Result<Product, RemoteError> {
        debug!("Creating remote product id={}", product.id);
        let response = self
            .client
            .post(self.url("/products"))
            .json(product)
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_success(response).await
    }

    async fn update_product(&self, product: &Product) -> Result<Product, RemoteError> {
        let response = self
            .client
            .put(self.url(&format!("/products/{}", product.id)))
            .json(product)
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_success(response).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<u16, RemoteError> {
        let response = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await
            .map_err(Self::unreachable)?;
        Ok(response.status().as_u16())
    }

    async fn list_sellers(&self) -> Result<Vec<Seller>, RemoteError> {
        let response = self
            .client
            .get(self.url("/sellers"))
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_success(response).await
    }

    async fn get_seller(&self, id: UserId) -> Result<Option<Seller>, RemoteError> {
        let response = self
            .client
            .get(self.url(&format!("/sellers/{id}")))
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_optional(response).await
    }

    async fn create_seller(&self, seller: &Seller) -> Result<Seller, RemoteError> {
        debug!("Creating remote seller id={}", seller.user_id);
        let response = self
            .client
            .post(self.url("/sellers"))
            .json(seller)
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_success(response).await
    }

    async fn patch_seller(
        &self,
        id: UserId,
        patch: &SellerPatch,
    ) -> Result<RemoteWrite<Seller>, RemoteError> {
        let response = self
            .client
            .patch(self.url(&format!("/sellers/{id}")))
            .json(patch)
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_write(response).await
    }

    async fn put_seller(
        &self,
        id: UserId,
        patch: &SellerPatch,
    ) -> Result<RemoteWrite<Seller>, RemoteError> {
        let response = self
            .client
            .put(self.url(&format!("/sellers/{id}")))
            .json(patch)
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_write(response).await
    }

    async fn find_sellers_by_email(&self, email: &str) -> Result<Vec<Seller>, RemoteError> {
        let response = self
            .client
            .get(self.url("/sellers"))
            .query(&[("email", email)])
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_success(response).await
    }

    async fn create_user(&self, user: &User) -> Result<User, RemoteError> {
        let response = self
            .client
            .post(self.url("/users"))
            .json(user)
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_success(response).await
    }

    async fn update_user(&self, user: &User) -> Result<User, RemoteError> {
        let response = self
            .client
            .put(self.url(&format!("/users/{}", user.id)))
            .json(user)
            .send()
            .await
            .map_err(Self::unreachable)?;
        Self::parse_success(response).await
    }
}
