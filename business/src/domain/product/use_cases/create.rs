use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::principal::Principal;

pub struct CreateProductParams {
    pub principal: Principal,
    /// Must be unset; the store assigns the identifier.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    /// Returns the stored product carrying its assigned id.
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
