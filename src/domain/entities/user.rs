use crate::domain::value_objects::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "CLIENT")]
    Client,
    #[serde(rename = "SELLER")]
    Seller,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => "CLIENT",
            UserRole::Seller => "SELLER",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "CLIENT" => Ok(UserRole::Client),
            "SELLER" => Ok(UserRole::Seller),
            other => Err(format!("Unknown user role: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub last_name: String,
    pub email: String,
    /// Opaque digest produced by the password hasher. Plaintext never
    /// reaches this struct.
    pub password_hash: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, last_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: UserId::new(0),
            name,
            last_name,
            email,
            password_hash,
            role: UserRole::Client,
            phone: None,
            address: None,
            photo_url: None,
            created_at: super::now_millis(),
        }
    }

    pub fn assign_id(&mut self, id: UserId) {
        self.id = id;
    }

    /// CLIENT -> SELLER is the only role transition; there is no demotion.
    pub fn promote_to_seller(&mut self) {
        self.role = UserRole::Seller;
    }

    pub fn is_seller(&self) -> bool {
        self.role == UserRole::Seller
    }
}
