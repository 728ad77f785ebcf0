use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::principal::Principal;

pub struct UpdateProductParams {
    pub principal: Principal,
    pub id: ProductId,
    /// Id carried in the request body, if any. Must match `id`.
    pub body_id: Option<ProductId>,
    pub changes: ProductChanges,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
