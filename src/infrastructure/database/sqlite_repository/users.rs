use super::queries::{DELETE_USER, SELECT_USER_BY_EMAIL, SELECT_USER_BY_ID, UPSERT_USER};
use super::SqliteCatalogStore;
use crate::application::ports::repositories::{StoreEvent, UserRepository};
use crate::domain::entities::{User, UserRole};
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sqlx::FromRow;
use tokio::sync::broadcast;

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: String,
    phone: Option<String>,
    address: Option<String>,
    photo_url: Option<String>,
    created_at: i64,
}

impl UserRow {
    fn into_domain(self) -> Result<User, AppError> {
        let role = UserRole::parse(&self.role).map_err(AppError::Serialization)?;
        let created_at = Utc
            .timestamp_millis_opt(self.created_at)
            .single()
            .ok_or_else(|| AppError::Serialization("Invalid timestamp".to_string()))?;

        Ok(User {
            id: UserId::new(self.id),
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            role,
            phone: self.phone,
            address: self.address,
            photo_url: self.photo_url,
            created_at,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteCatalogStore {
    async fn get(&self, id: UserId) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(SELECT_USER_BY_ID)
            .bind(id.get())
            .fetch_optional(self.pool.get_pool())
            .await?;
        row.map(UserRow::into_domain).transpose()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(SELECT_USER_BY_EMAIL)
            .bind(email)
            .fetch_optional(self.pool.get_pool())
            .await?;
        row.map(UserRow::into_domain).transpose()
    }

    async fn upsert(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(UPSERT_USER)
            .bind(user.id.get())
            .bind(&user.name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(&user.phone)
            .bind(&user.address)
            .bind(&user.photo_url)
            .bind(user.created_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;
        self.changes.publish(StoreEvent::UserChanged(user.id));
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), AppError> {
        sqlx::query(DELETE_USER)
            .bind(id.get())
            .execute(self.pool.get_pool())
            .await?;
        self.changes.publish(StoreEvent::UserChanged(id));
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

    fn sample_user(id: i64, email: &str) -> User {
        let mut user = User::new(
            "Pedro".to_string(),
            "Soto".to_string(),
            email.to_string(),
            "digest".to_string(),
        );
        user.assign_id(UserId::new(id));
        user
    }

    #[tokio::test]
    async fn upsert_and_get_round_trip() {
        let store = fresh_store().await;
        let user = sample_user(1, "pedro@example.com");

        store.upsert(&user).await.expect("upsert");

        let found = store.get(UserId::new(1)).await.expect("get").unwrap();
        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn email_lookup_is_case_insensitive() {
        let store = fresh_store().await;
        store
            .upsert(&sample_user(1, "Pedro@Example.com"))
            .await
            .unwrap();

        let found = store
            .get_by_email("pedro@example.com")
            .await
            .expect("lookup");
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn role_survives_round_trip() {
        let store = fresh_store().await;
        let mut user = sample_user(2, "ana@example.com");
        user.promote_to_seller();

        store.upsert(&user).await.unwrap();

        let found = store.get(UserId::new(2)).await.unwrap().unwrap();
        assert_eq!(found.role, UserRole::Seller);
    }
}
