use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::authorize::load_authorized;
use crate::domain::logger::Logger;
use crate::domain::product::authorization::{ProductAuthorizer, ProductOperation};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::service::ProductService;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub authorizer: Arc<dyn ProductAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = load_authorized(
            self.service.as_ref(),
            self.authorizer.as_ref(),
            self.logger.as_ref(),
            &params.principal,
            params.id,
            ProductOperation::Update,
        )
        .await?;

        // Checked against a product that exists, so unknown ids stay NotFound.
        if let Some(body_id) = params.body_id
            && body_id != params.id
        {
            return Err(ProductError::IdMismatch);
        }

        let updated = existing.apply_changes(params.changes)?;
        let stored = self.service.update_product(&updated).await?;

        self.logger.info(&format!("Product updated: {}", stored.id));
        Ok(stored)
    }
}
