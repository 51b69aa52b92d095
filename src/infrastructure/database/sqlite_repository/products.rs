use super::queries::{
    DELETE_PRODUCT, SEARCH_PRODUCTS_BY_PRODUCER, SELECT_ALL_PRODUCTS, SELECT_PRODUCTS_BY_CATEGORY,
    SELECT_PRODUCTS_BY_CITY, SELECT_PRODUCTS_BY_OWNER, SELECT_PRODUCT_BY_ID, UPSERT_PRODUCT,
};
use super::SqliteCatalogStore;
use crate::application::ports::repositories::{ProductRepository, StoreEvent};
use crate::domain::entities::Product;
use crate::domain::value_objects::{ProductId, UserId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use tokio::sync::broadcast;

#[derive(Debug, FromRow)]
pub(super) struct ProductRow {
    id: i64,
    name: String,
    description: String,
    producer: String,
    category: String,
    images: String,
    price: String,
    location: String,
    owner_id: Option<i64>,
    created_at: i64,
}

impl ProductRow {
    pub(super) fn into_domain(self) -> Result<Product, AppError> {
        let images: Vec<String> = serde_json::from_str(&self.images)
            .map_err(|err| AppError::Serialization(format!("Invalid image list: {err}")))?;
        let price: Decimal = self
            .price
            .parse()
            .map_err(|err| AppError::Serialization(format!("Invalid price: {err}")))?;
        let created_at = Utc
            .timestamp_millis_opt(self.created_at)
            .single()
            .ok_or_else(|| AppError::Serialization("Invalid timestamp".to_string()))?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            producer: self.producer,
            category: self.category,
            images,
            price,
            location: self.location,
            owner_id: self.owner_id.map(UserId::new),
            created_at,
        })
    }
}

impl SqliteCatalogStore {
    async fn write_product(&self, product: &Product) -> Result<(), AppError> {
        let images = serde_json::to_string(&product.images)?;
        sqlx::query(UPSERT_PRODUCT)
            .bind(product.id.get())
            .bind(&product.name)
            .bind(&product.description)
            .bind(&product.producer)
            .bind(&product.category)
            .bind(images)
            .bind(product.price.to_string())
            .bind(&product.location)
            .bind(product.owner_id.map(UserId::get))
            .bind(product.created_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn fetch_products(&self, query: &str, pattern: String) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(query)
            .bind(pattern)
            .fetch_all(self.pool.get_pool())
            .await?;
        rows.into_iter().map(ProductRow::into_domain).collect()
    }
}

#[async_trait]
impl ProductRepository for SqliteCatalogStore {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(SELECT_PRODUCT_BY_ID)
            .bind(id.get())
            .fetch_optional(self.pool.get_pool())
            .await?;
        row.map(ProductRow::into_domain).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(SELECT_ALL_PRODUCTS)
            .fetch_all(self.pool.get_pool())
            .await?;
        rows.into_iter().map(ProductRow::into_domain).collect()
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(SELECT_PRODUCTS_BY_OWNER)
            .bind(owner.get())
            .fetch_all(self.pool.get_pool())
            .await?;
        rows.into_iter().map(ProductRow::into_domain).collect()
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(SELECT_PRODUCTS_BY_CATEGORY)
            .bind(category)
            .fetch_all(self.pool.get_pool())
            .await?;
        rows.into_iter().map(ProductRow::into_domain).collect()
    }

    async fn list_by_city(&self, city: &str) -> Result<Vec<Product>, AppError> {
        self.fetch_products(SELECT_PRODUCTS_BY_CITY, format!("%{city}%"))
            .await
    }

    async fn search_by_producer(&self, query: &str) -> Result<Vec<Product>, AppError> {
        self.fetch_products(SEARCH_PRODUCTS_BY_PRODUCER, format!("%{query}%"))
            .await
    }

    async fn upsert(&self, product: &Product) -> Result<(), AppError> {
        self.write_product(product).await?;
        self.changes.publish(StoreEvent::ProductChanged(product.id));
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), AppError> {
        sqlx::query(DELETE_PRODUCT)
            .bind(id.get())
            .execute(self.pool.get_pool())
            .await?;
        self.changes.publish(StoreEvent::ProductRemoved(id));
        Ok(())
    }

    async fn bulk_upsert(&self, products: &[Product]) -> Result<(), AppError> {
        for product in products {
            self.write_product(product).await?;
        }
        for product in products {
            self.changes.publish(StoreEvent::ProductChanged(product.id));
        }
        Ok(())
    }

    fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::fresh_store;
    use super::*;

    fn sample_product(id: i64, owner: Option<i64>) -> Product {
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
        product.owner_id = owner.map(UserId::new);
        product
    }

    #[tokio::test]
    async fn upsert_and_get_round_trip() {
        let store = fresh_store().await;
        let product = sample_product(1, Some(7));

        store.upsert(&product).await.expect("upsert");

        let found = store.get(ProductId::new(1)).await.expect("get").unwrap();
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn upsert_replaces_on_conflict() {
        let store = fresh_store().await;
        let mut product = sample_product(1, None);
        store.upsert(&product).await.expect("insert");

        product.rename_producer("La Granja");
        store.upsert(&product).await.expect("replace");

        let all = store.list_all().await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].producer, "La Granja");
    }

    #[tokio::test]
    async fn list_by_owner_filters_rows() {
        let store = fresh_store().await;
        store.upsert(&sample_product(1, Some(7))).await.unwrap();
        store.upsert(&sample_product(2, Some(7))).await.unwrap();
        store.upsert(&sample_product(3, Some(8))).await.unwrap();

        let owned = store.list_by_owner(UserId::new(7)).await.expect("list");
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|p| p.owner_id == Some(UserId::new(7))));
    }

    #[tokio::test]
    async fn city_filter_matches_substring() {
        let store = fresh_store().await;
        store.upsert(&sample_product(1, None)).await.unwrap();

        let hits = store.list_by_city("uillot").await.expect("list");
        assert_eq!(hits.len(), 1);

        let misses = store.list_by_city("Santiago").await.expect("list");
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn search_by_producer_is_partial() {
        let store = fresh_store().await;
        store.upsert(&sample_product(1, None)).await.unwrap();

        let hits = store.search_by_producer("Huerto").await.expect("search");
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn delete_publishes_removal() {
        let store = fresh_store().await;
        let product = sample_product(5, None);
        store.upsert(&product).await.unwrap();

        let mut rx = store.subscribe_changes();
        store.delete(ProductId::new(5)).await.expect("delete");

        assert!(store.get(ProductId::new(5)).await.unwrap().is_none());
        assert_eq!(
            rx.recv().await.unwrap(),
            StoreEvent::ProductRemoved(ProductId::new(5))
        );
    }

    #[tokio::test]
    async fn bulk_upsert_replaces_by_id() {
        let store = fresh_store().await;
        store.upsert(&sample_product(1, None)).await.unwrap();

        let incoming = vec![sample_product(1, Some(2)), sample_product(9, None)];
        store.bulk_upsert(&incoming).await.expect("bulk");

        let all = store.list_all().await.expect("list");
        assert_eq!(all.len(), 2);
    }
}
