use async_trait::async_trait;

use crate::domain::product::authorization::ProductOperation;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::principal::Principal;

pub struct AuthorizeProductParams {
    pub principal: Principal,
    pub id: ProductId,
    pub operation: ProductOperation,
}

/// Loads a product and checks the principal may run `operation` on it,
/// without mutating anything. Backs the edit and delete confirmation pages.
#[async_trait]
pub trait AuthorizeProductUseCase: Send + Sync {
    async fn execute(&self, params: AuthorizeProductParams) -> Result<Product, ProductError>;
}
