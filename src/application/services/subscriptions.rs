use crate::application::ports::repositories::{
    FavoriteRepository, ProductRepository, StoreEvent,
};
use crate::domain::entities::Product;
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::error::AppError;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Live view of a single product. `changed` parks on the store's change
/// feed and re-reads the row when a write touches this id; a lagged feed
/// degrades to an immediate re-read.
pub struct ProductWatch {
    products: Arc<dyn ProductRepository>,
    rx: broadcast::Receiver<StoreEvent>,
    id: ProductId,
}

impl ProductWatch {
    pub(crate) fn new(products: Arc<dyn ProductRepository>, id: ProductId) -> Self {
        let rx = products.subscribe_changes();
        Self { products, rx, id }
    }

    pub async fn current(&self) -> Result<Option<Product>, AppError> {
        self.products.get(self.id).await
    }

    pub async fn changed(&mut self) -> Result<Option<Product>, AppError> {
        loop {
            match self.rx.recv().await {
                Ok(StoreEvent::ProductChanged(id) | StoreEvent::ProductRemoved(id))
                    if id == self.id =>
                {
                    return self.products.get(self.id).await;
                }
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_))
                | Err(broadcast::error::RecvError::Closed) => {
                    return self.products.get(self.id).await;
                }
            }
        }
    }
}

/// Live view of one seller's catalog. Any product write can change list
/// membership, so every product event triggers a re-query.
pub struct OwnerCatalogWatch {
    products: Arc<dyn ProductRepository>,
    rx: broadcast::Receiver<StoreEvent>,
    owner: UserId,
}

impl OwnerCatalogWatch {
    pub(crate) fn new(products: Arc<dyn ProductRepository>, owner: UserId) -> Self {
        let rx = products.subscribe_changes();
        Self {
            products,
            rx,
            owner,
        }
    }

    pub async fn current(&self) -> Result<Vec<Product>, AppError> {
        self.products.list_by_owner(self.owner).await
    }

    pub async fn changed(&mut self) -> Result<Vec<Product>, AppError> {
        loop {
            match self.rx.recv().await {
                Ok(StoreEvent::ProductChanged(_) | StoreEvent::ProductRemoved(_)) => {
                    return self.products.list_by_owner(self.owner).await;
                }
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_))
                | Err(broadcast::error::RecvError::Closed) => {
                    return self.products.list_by_owner(self.owner).await;
                }
            }
        }
    }
}

/// Live view of one user's favorited products, re-joined when either the
/// favorites set or a product row changes.
pub struct FavoritesWatch {
    favorites: Arc<dyn FavoriteRepository>,
    rx: broadcast::Receiver<StoreEvent>,
    user: UserId,
}

impl FavoritesWatch {
    pub(crate) fn new(favorites: Arc<dyn FavoriteRepository>, user: UserId) -> Self {
        let rx = favorites.subscribe_changes();
        Self {
            favorites,
            rx,
            user,
        }
    }

    pub async fn current(&self) -> Result<Vec<Product>, AppError> {
        self.favorites.products_for_user(self.user).await
    }

    pub async fn changed(&mut self) -> Result<Vec<Product>, AppError> {
        loop {
            match self.rx.recv().await {
                Ok(StoreEvent::FavoritesChanged(user)) if user == self.user => {
                    return self.favorites.products_for_user(self.user).await;
                }
                Ok(StoreEvent::ProductChanged(_) | StoreEvent::ProductRemoved(_)) => {
                    return self.favorites.products_for_user(self.user).await;
                }
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_))
                | Err(broadcast::error::RecvError::Closed) => {
                    return self.favorites.products_for_user(self.user).await;
                }
            }
        }
    }
}
