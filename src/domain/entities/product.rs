use crate::domain::value_objects::{ProductId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const MAX_PRODUCT_IMAGES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Denormalized display name of the owning seller's entrepreneurship.
    /// Must match the seller's current value while `owner_id` is set.
    pub producer: String,
    pub category: String,
    pub images: Vec<String>,
    pub price: Decimal,
    pub location: String,
    pub owner_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        name: String,
        description: String,
        producer: String,
        category: String,
        images: Vec<String>,
        price: Decimal,
        location: String,
    ) -> Self {
        Self {
            id: ProductId::new(0),
            name,
            description,
            producer,
            category,
            images,
            price,
            location,
            owner_id: None,
            created_at: super::now_millis(),
        }
    }

    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner_id = Some(owner);
        self
    }

    pub fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }

    pub fn rename_producer(&mut self, producer: &str) {
        self.producer = producer.to_string();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name must not be empty".to_string());
        }
        if self.images.is_empty() {
            return Err("Product requires at least one image".to_string());
        }
        if self.images.len() > MAX_PRODUCT_IMAGES {
            return Err(format!(
                "Product allows at most {MAX_PRODUCT_IMAGES} images, got {}",
                self.images.len()
            ));
        }
        if self.price.is_sign_negative() {
            return Err("Product price must not be negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product::new(
            "Artisan honey".to_string(),
            "Raw wildflower honey".to_string(),
            "La Colmena".to_string(),
            "Food".to_string(),
            vec!["honey.jpg".to_string()],
            Decimal::new(1250, 2),
            "Valparaiso".to_string(),
        )
    }

    #[test]
    fn new_product_starts_unassigned() {
        let product = sample_product();
        assert!(!product.id.is_assigned());
        assert!(product.owner_id.is_none());
    }

    #[test]
    fn validate_rejects_missing_images() {
        let mut product = sample_product();
        product.images.clear();
        assert!(product.validate().is_err());
    }

    #[test]
    fn validate_rejects_too_many_images() {
        let mut product = sample_product();
        product.images = (0..11).map(|i| format!("img-{i}.jpg")).collect();
        assert!(product.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut product = sample_product();
        product.price = Decimal::new(-100, 2);
        assert!(product.validate().is_err());
    }

    #[test]
    fn rename_producer_overwrites_display_name() {
        let mut product = sample_product().with_owner(UserId::new(3));
        product.rename_producer("Miel del Sur");
        assert_eq!(product.producer, "Miel del Sur");
    }
}
