use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            UserId::new(self.owner_id),
            self.title,
            self.description,
            self.seller,
            self.price,
            self.quantity,
            self.image_url,
            self.created_at,
            self.updated_at,
        )
    }
}
