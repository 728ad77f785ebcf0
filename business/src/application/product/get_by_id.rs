use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::service::ProductService;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.service
            .get_product_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductSvc, mock_logger, product};
    use crate::domain::product::value_objects::ProductId;

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut service = MockProductSvc::new();
        service
            .expect_get_product_by_id()
            .returning(|id| Ok(Some(product(id.value(), "alice", 2))));

        let use_case = GetProductByIdUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(2),
            })
            .await;

        assert_eq!(result.unwrap().id, ProductId::new(2));
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut service = MockProductSvc::new();
        service.expect_get_product_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(4),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
