use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::authorize::load_authorized;
use crate::domain::logger::Logger;
use crate::domain::product::authorization::{ProductAuthorizer, ProductOperation};
use crate::domain::product::errors::ProductError;
use crate::domain::product::service::ProductService;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub authorizer: Arc<dyn ProductAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        load_authorized(
            self.service.as_ref(),
            self.authorizer.as_ref(),
            self.logger.as_ref(),
            &params.principal,
            params.id,
            ProductOperation::Delete,
        )
        .await?;

        // A concurrent delete between the read and this call leaves nothing to remove.
        if !self.service.delete_product_by_id(params.id).await? {
            return Err(ProductError::NotFound);
        }

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductSvc, mock_logger, product};
    use crate::domain::product::authorization::OwnershipPolicy;
    use crate::domain::product::value_objects::ProductId;
    use crate::domain::shared::principal::Principal;

    fn use_case(service: MockProductSvc) -> DeleteProductUseCaseImpl {
        DeleteProductUseCaseImpl {
            service: Arc::new(service),
            authorizer: Arc::new(OwnershipPolicy),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_delete_product_when_owner_asks() {
        let mut service = MockProductSvc::new();
        service
            .expect_get_product_by_id()
            .returning(|id| Ok(Some(product(id.value(), "alice", 1))));
        service
            .expect_delete_product_by_id()
            .times(1)
            .returning(|_| Ok(true));

        let result = use_case(service)
            .execute(DeleteProductParams {
                principal: Principal::customer("alice"),
                id: ProductId::new(3),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_allow_administrator_to_delete_foreign_product() {
        let mut service = MockProductSvc::new();
        service
            .expect_get_product_by_id()
            .returning(|id| Ok(Some(product(id.value(), "alice", 1))));
        service
            .expect_delete_product_by_id()
            .returning(|_| Ok(true));

        let result = use_case(service)
            .execute(DeleteProductParams {
                principal: Principal::administrator("ops"),
                id: ProductId::new(3),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut service = MockProductSvc::new();
        service.expect_get_product_by_id().returning(|_| Ok(None));
        service.expect_delete_product_by_id().never();

        let result = use_case(service)
            .execute(DeleteProductParams {
                principal: Principal::customer("alice"),
                id: ProductId::new(9),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_forbid_delete_by_anonymous_without_mutation() {
        let mut service = MockProductSvc::new();
        service
            .expect_get_product_by_id()
            .returning(|id| Ok(Some(product(id.value(), "alice", 1))));
        service.expect_delete_product_by_id().never();

        let result = use_case(service)
            .execute(DeleteProductParams {
                principal: Principal::Anonymous,
                id: ProductId::new(3),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Forbidden)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_row_vanished_before_delete() {
        let mut service = MockProductSvc::new();
        service
            .expect_get_product_by_id()
            .returning(|id| Ok(Some(product(id.value(), "alice", 1))));
        service
            .expect_delete_product_by_id()
            .returning(|_| Ok(false));

        let result = use_case(service)
            .execute(DeleteProductParams {
                principal: Principal::customer("alice"),
                id: ProductId::new(3),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
