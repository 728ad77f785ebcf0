use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::service::ProductService;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");

        let products = self.service.get_all_products().await?;

        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductSvc, mock_logger, product};

    #[tokio::test]
    async fn should_return_every_product() {
        let mut service = MockProductSvc::new();
        service
            .expect_get_all_products()
            .returning(|| Ok(vec![product(1, "alice", 3), product(2, "bob", 1)]));

        let use_case = GetAllProductsUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_catalog_is_empty() {
        let mut service = MockProductSvc::new();
        service.expect_get_all_products().returning(|| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }
}
