use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::service::ProductService;
use crate::domain::product::use_cases::buy::{BuyProductParams, BuyProductUseCase};

pub struct BuyProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BuyProductUseCase for BuyProductUseCaseImpl {
    async fn execute(&self, params: BuyProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Buying product: {}", params.id));

        let product = self.service.buy_product_by_id(params.id).await?;

        self.logger.info(&format!(
            "Product {} bought, {} left",
            product.id, product.quantity
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductSvc, mock_logger, product};
    use crate::domain::product::value_objects::ProductId;

    fn use_case(service: MockProductSvc) -> BuyProductUseCaseImpl {
        BuyProductUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_product_with_decremented_quantity() {
        let mut service = MockProductSvc::new();
        service
            .expect_buy_product_by_id()
            .returning(|id| Ok(product(id.value(), "alice", 0)));

        let bought = use_case(service)
            .execute(BuyProductParams {
                id: ProductId::new(1),
            })
            .await
            .unwrap();

        assert_eq!(bought.quantity, 0);
    }

    #[tokio::test]
    async fn should_propagate_out_of_stock() {
        let mut service = MockProductSvc::new();
        service
            .expect_buy_product_by_id()
            .returning(|_| Err(ProductError::OutOfStock));

        let result = use_case(service)
            .execute(BuyProductParams {
                id: ProductId::new(1),
            })
            .await;

        assert!(matches!(result, Err(ProductError::OutOfStock)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_buying_unknown_product() {
        let mut service = MockProductSvc::new();
        service
            .expect_buy_product_by_id()
            .returning(|_| Err(ProductError::NotFound));

        let result = use_case(service)
            .execute(BuyProductParams {
                id: ProductId::new(77),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
