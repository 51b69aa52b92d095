use super::subscriptions::FavoritesWatch;
use crate::application::ports::repositories::FavoriteRepository;
use crate::domain::entities::{Favorite, Product};
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::error::AppError;
use std::sync::Arc;

/// Local-only favorites index. Favorites never touch the remote service;
/// both mutations are idempotent.
pub struct FavoritesService {
    favorites: Arc<dyn FavoriteRepository>,
}

impl FavoritesService {
    pub fn new(favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorites }
    }

    pub async fn add(&self, user: UserId, product: ProductId) -> Result<Favorite, AppError> {
        let favorite = Favorite::new(user, product);
        self.favorites.add(&favorite).await?;
        Ok(favorite)
    }

    pub async fn remove(&self, user: UserId, product: ProductId) -> Result<(), AppError> {
        self.favorites.remove(user, product).await
    }

    /// Joined view: the favorited products themselves.
    pub async fn products_for(&self, user: UserId) -> Result<Vec<Product>, AppError> {
        self.favorites.products_for_user(user).await
    }

    /// Raw id set, for marking hearts on listing screens.
    pub async fn favorite_ids_for(&self, user: UserId) -> Result<Vec<ProductId>, AppError> {
        let rows = self.favorites.list_for_user(user).await?;
        Ok(rows.into_iter().map(|f| f.product_id).collect())
    }

    pub fn observe(&self, user: UserId) -> FavoritesWatch {
        FavoritesWatch::new(self.favorites.clone(), user)
    }
}
