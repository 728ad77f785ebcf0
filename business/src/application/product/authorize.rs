use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::authorization::{ProductAuthorizer, ProductOperation};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::service::ProductService;
use crate::domain::product::use_cases::authorize::{
    AuthorizeProductParams, AuthorizeProductUseCase,
};
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::principal::Principal;

/// Runs the policy and turns a denial into `ProductError::Forbidden`.
pub(crate) fn ensure_allowed(
    authorizer: &dyn ProductAuthorizer,
    logger: &dyn Logger,
    principal: &Principal,
    product: &Product,
    operation: ProductOperation,
) -> Result<(), ProductError> {
    if authorizer.authorize(principal, product, operation).is_allowed() {
        return Ok(());
    }
    logger.warn(&format!(
        "Denied {} on product {} for {}",
        operation, product.id, principal
    ));
    Err(ProductError::Forbidden)
}

/// Single fetch-or-absent read followed by the policy check. Every
/// id-addressed mutation goes through here right before touching the store.
pub(crate) async fn load_authorized(
    service: &dyn ProductService,
    authorizer: &dyn ProductAuthorizer,
    logger: &dyn Logger,
    principal: &Principal,
    id: ProductId,
    operation: ProductOperation,
) -> Result<Product, ProductError> {
    let product = service
        .get_product_by_id(id)
        .await?
        .ok_or(ProductError::NotFound)?;
    ensure_allowed(authorizer, logger, principal, &product, operation)?;
    Ok(product)
}

pub struct AuthorizeProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub authorizer: Arc<dyn ProductAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthorizeProductUseCase for AuthorizeProductUseCaseImpl {
    async fn execute(&self, params: AuthorizeProductParams) -> Result<Product, ProductError> {
        load_authorized(
            self.service.as_ref(),
            self.authorizer.as_ref(),
            self.logger.as_ref(),
            &params.principal,
            params.id,
            params.operation,
        )
        .await
    }
}
