use super::queries::{
    DELETE_FAVORITE, INSERT_FAVORITE, SELECT_FAVORITES_BY_USER, SELECT_FAVORITE_PRODUCTS,
};
use super::SqliteCatalogStore;
use crate::application::ports::repositories::{FavoriteRepository, StoreEvent};
use crate::domain::entities::{Favorite, Product};
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sqlx::FromRow;
use tokio::sync::broadcast;

#[derive(Debug, FromRow)]
struct FavoriteRow {
    user_id: i64,
    product_id: i64,
    created_at: i64,
}

impl FavoriteRow {
    fn into_domain(self) -> Result<Favorite, AppError> {
        let created_at = Utc
            .timestamp_millis_opt(self.created_at)
            .single()
            .ok_or_else(|| AppError::Serialization("Invalid timestamp".to_string()))?;
        Ok(Favorite {
            user_id: UserId::new(self.user_id),
            product_id: ProductId::new(self.product_id),
            created_at,
        })
    }
}

#[async_trait]
impl FavoriteRepository for SqliteCatalogStore {
    async fn add(&self, favorite: &Favorite) -> Result<(), AppError> {
        sqlx::query(INSERT_FAVORITE)
            .bind(favorite.user_id.get())
            .bind(favorite.product_id.get())
            .bind(favorite.created_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;
        self.changes
            .publish(StoreEvent::FavoritesChanged(favorite.user_id));
        Ok(())
    }

    async fn remove(&self, user: UserId, product: ProductId) -> Result<(), AppError> {
        sqlx::query(DELETE_FAVORITE)
            .bind(user.get())
            .bind(product.get())
            .execute(self.pool.get_pool())
            .await?;
        self.changes.publish(StoreEvent::FavoritesChanged(user));
        Ok(())
    }

    async fn list_for_user(&self, user: UserId) -> Result<Vec<Favorite>, AppError> {
        let rows = sqlx::query_as::<_, FavoriteRow>(SELECT_FAVORITES_BY_USER)
            .bind(user.get())
            .fetch_all(self.pool.get_pool())
            .await?;
        rows.into_iter().map(FavoriteRow::into_domain).collect()
    }

    async fn products_for_user(&self, user: UserId) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, super::products::ProductRow>(SELECT_FAVORITE_PRODUCTS)
            .bind(user.get())
            .fetch_all(self.pool.get_pool())
            .await?;
        rows.into_iter()
            .map(super::products::ProductRow::into_domain)
            .collect()
    }

    fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::fresh_store;
    use super::*;
    use crate::application::ports::repositories::ProductRepository;
    use rust_decimal::Decimal;

    fn sample_product(id: i64) -> Product {
        let mut product = Product::new(
            format!("Product {id}"),
            "Locally made".to_string(),
            "El Huerto".to_string(),
            "Food".to_string(),
            vec!["front.jpg".to_string()],
            Decimal::new(990, 2),
            "Quillota".to_string(),
        );
        product.assign_id(ProductId::new(id));
        product
    }

    #[tokio::test]
    async fn re_adding_a_favorite_keeps_one_row() {
        let store = fresh_store().await;
        let favorites: &dyn FavoriteRepository = &store;
        let user = UserId::new(3);
        let product = ProductId::new(10);

        favorites.add(&Favorite::new(user, product)).await.unwrap();
        favorites.add(&Favorite::new(user, product)).await.unwrap();

        let rows = favorites.list_for_user(user).await.expect("list");
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn removing_missing_favorite_is_a_no_op() {
        let store = fresh_store().await;
        let favorites: &dyn FavoriteRepository = &store;
        let user = UserId::new(3);

        favorites
            .add(&Favorite::new(user, ProductId::new(10)))
            .await
            .unwrap();

        favorites
            .remove(user, ProductId::new(999))
            .await
            .expect("no-op remove");

        let rows = favorites.list_for_user(user).await.expect("list");
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn join_returns_favorited_products_only() {
        let store = fresh_store().await;
        let favorites: &dyn FavoriteRepository = &store;
        let products: &dyn ProductRepository = &store;
        let user = UserId::new(3);

        products.upsert(&sample_product(1)).await.unwrap();
        products.upsert(&sample_product(2)).await.unwrap();
        favorites
            .add(&Favorite::new(user, ProductId::new(2)))
            .await
            .unwrap();

        let joined = favorites.products_for_user(user).await.expect("join");
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].id, ProductId::new(2));
    }

    #[tokio::test]
    async fn mutations_announce_favorites_change() {
        let store = fresh_store().await;
        let favorites: &dyn FavoriteRepository = &store;
        let user = UserId::new(5);

        let mut rx = favorites.subscribe_changes();
        favorites
            .add(&Favorite::new(user, ProductId::new(1)))
            .await
            .unwrap();

        assert_eq!(
            rx.recv().await.unwrap(),
            StoreEvent::FavoritesChanged(user)
        );
    }
}
