use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub struct BuyProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait BuyProductUseCase: Send + Sync {
    /// Returns the product after its quantity was decremented.
    async fn execute(&self, params: BuyProductParams) -> Result<Product, ProductError>;
}
