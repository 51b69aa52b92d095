use super::queries::{
    DELETE_SELLER, PROMOTE_USER_TO_SELLER, SELECT_ALL_SELLERS, SELECT_SELLER_BY_ID, UPSERT_SELLER,
};
use super::SqliteCatalogStore;
use crate::application::ports::repositories::{SellerRepository, StoreEvent};
use crate::domain::entities::Seller;
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, Sqlite};
use tokio::sync::broadcast;

#[derive(Debug, FromRow)]
struct SellerRow {
    user_id: i64,
    name: String,
    lastname: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    entrepreneurship: String,
    photo_url: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl SellerRow {
    fn into_domain(self) -> Seller {
        Seller {
            user_id: UserId::new(self.user_id),
            name: self.name,
            lastname: self.lastname,
            email: self.email,
            phone: self.phone,
            address: self.address,
            entrepreneurship: self.entrepreneurship,
            photo_url: self.photo_url,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

fn bind_seller<'q>(
    query: sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    seller: &'q Seller,
) -> sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    query
        .bind(seller.user_id.get())
        .bind(&seller.name)
        .bind(&seller.lastname)
        .bind(&seller.email)
        .bind(&seller.phone)
        .bind(&seller.address)
        .bind(&seller.entrepreneurship)
        .bind(&seller.photo_url)
        .bind(seller.latitude)
        .bind(seller.longitude)
}

#[async_trait]
impl SellerRepository for SqliteCatalogStore {
    async fn get(&self, id: UserId) -> Result<Option<Seller>, AppError> {
        let row = sqlx::query_as::<_, SellerRow>(SELECT_SELLER_BY_ID)
            .bind(id.get())
            .fetch_optional(self.pool.get_pool())
            .await?;
        Ok(row.map(SellerRow::into_domain))
    }

    async fn list_all(&self) -> Result<Vec<Seller>, AppError> {
        let rows = sqlx::query_as::<_, SellerRow>(SELECT_ALL_SELLERS)
            .fetch_all(self.pool.get_pool())
            .await?;
        Ok(rows.into_iter().map(SellerRow::into_domain).collect())
    }

    async fn upsert(&self, seller: &Seller) -> Result<(), AppError> {
        bind_seller(sqlx::query(UPSERT_SELLER), seller)
            .execute(self.pool.get_pool())
            .await?;
        self.changes
            .publish(StoreEvent::SellerChanged(seller.user_id));
        Ok(())
    }

    async fn upsert_with_promotion(&self, seller: &Seller) -> Result<(), AppError> {
        let mut tx = self.pool.get_pool().begin().await?;
        bind_seller(sqlx::query(UPSERT_SELLER), seller)
            .execute(&mut *tx)
            .await?;
        sqlx::query(PROMOTE_USER_TO_SELLER)
            .bind(seller.user_id.get())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        self.changes
            .publish(StoreEvent::SellerChanged(seller.user_id));
        self.changes.publish(StoreEvent::UserChanged(seller.user_id));
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), AppError> {
        sqlx::query(DELETE_SELLER)
            .bind(id.get())
            .execute(self.pool.get_pool())
            .await?;
        self.changes.publish(StoreEvent::SellerChanged(id));
        Ok(())
    }

    fn subscribe_changes(&self) -> broadcast::Receiver<StoreEvent> {
        self.changes.subscribe()
    }
}
