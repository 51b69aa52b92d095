use super::user::User;
use crate::domain::value_objects::UserId;
use serde::{Deserialize, Serialize};

/// A seller profile extends a user identity: the key below *is* the owning
/// user's id, so a seller cannot exist without its user row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(rename = "id")]
    pub user_id: UserId,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Display name shown as `producer` on every product this seller owns.
    pub entrepreneurship: String,
    pub photo_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Seller {
    pub fn for_user(user: &User, entrepreneurship: String, address: String) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            lastname: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: Some(address),
            entrepreneurship,
            photo_url: user.photo_url.clone(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn rename_entrepreneurship(&mut self, name: &str) {
        self.entrepreneurship = name.to_string();
    }
}
