use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::authorize::ensure_allowed;
use crate::domain::logger::Logger;
use crate::domain::product::authorization::{ProductAuthorizer, ProductOperation};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::service::ProductService;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub authorizer: Arc<dyn ProductAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.title));

        // The owner comes from the caller, so there is nothing to build for anonymous requests.
        let Some(owner_id) = params.principal.user_id().cloned() else {
            self.logger
                .warn("Denied create for anonymous principal");
            return Err(ProductError::Forbidden);
        };

        if !params.id.is_unset() {
            return Err(ProductError::IdMustBeUnset);
        }

        let draft = Product::new(NewProductProps {
            owner_id,
            title: params.title,
            description: params.description,
            seller: params.seller,
            price: params.price,
            quantity: params.quantity,
            image_url: params.image_url,
        })?;

        ensure_allowed(
            self.authorizer.as_ref(),
            self.logger.as_ref(),
            &params.principal,
            &draft,
            ProductOperation::Create,
        )?;

        let id = self.service.add_product(&draft).await?;

        self.logger.info(&format!("Product created with id: {}", id));
        Ok(draft.with_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductSvc, mock_logger};
    use crate::domain::product::authorization::{AuthorizationDecision, OwnershipPolicy};
    use crate::domain::product::value_objects::{ProductId, parse_price};
    use crate::domain::shared::principal::Principal;
    use crate::domain::shared::value_objects::UserId;

    struct DenyAll;

    impl ProductAuthorizer for DenyAll {
        fn authorize(
            &self,
            _principal: &Principal,
            _product: &Product,
            _operation: ProductOperation,
        ) -> AuthorizationDecision {
            AuthorizationDecision::Deny
        }
    }

    fn params(principal: Principal) -> CreateProductParams {
        CreateProductParams {
            principal,
            id: ProductId::UNSET,
            title: "TestTitle".to_string(),
            description: "A product used in tests".to_string(),
            seller: "Test Seller".to_string(),
            price: parse_price("9.99").unwrap(),
            quantity: 1,
            image_url: "/images/test.png".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_product_with_assigned_id_and_caller_as_owner() {
        let mut service = MockProductSvc::new();
        service
            .expect_add_product()
            .withf(|product| product.id.is_unset() && product.owner_id.as_str() == "alice")
            .times(1)
            .returning(|_| Ok(ProductId::new(4)));

        let use_case = CreateProductUseCaseImpl {
            service: Arc::new(service),
            authorizer: Arc::new(OwnershipPolicy),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params(Principal::customer("alice")))
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.owner_id, UserId::new("alice"));
        assert_eq!(product.title, "TestTitle");
    }

    #[tokio::test]
    async fn should_reject_request_carrying_an_id() {
        let service = MockProductSvc::new();
        let use_case = CreateProductUseCaseImpl {
            service: Arc::new(service),
            authorizer: Arc::new(OwnershipPolicy),
            logger: mock_logger(),
        };

        let mut with_id = params(Principal::customer("alice"));
        with_id.id = ProductId::new(12);

        let result = use_case.execute(with_id).await;

        assert!(matches!(result, Err(ProductError::IdMustBeUnset)));
    }

    #[tokio::test]
    async fn should_reject_invalid_fields_without_touching_the_store() {
        let mut service = MockProductSvc::new();
        service.expect_add_product().never();
        let use_case = CreateProductUseCaseImpl {
            service: Arc::new(service),
            authorizer: Arc::new(OwnershipPolicy),
            logger: mock_logger(),
        };

        let mut invalid = params(Principal::customer("alice"));
        invalid.quantity = 0;

        let result = use_case.execute(invalid).await;

        assert!(matches!(result, Err(ProductError::QuantityTooLow)));
    }

    #[tokio::test]
    async fn should_forbid_anonymous_principal() {
        let mut service = MockProductSvc::new();
        service.expect_add_product().never();
        let use_case = CreateProductUseCaseImpl {
            service: Arc::new(service),
            authorizer: Arc::new(OwnershipPolicy),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Principal::Anonymous)).await;

        assert!(matches!(result, Err(ProductError::Forbidden)));
    }

    #[tokio::test]
    async fn should_forbid_when_policy_denies() {
        let mut service = MockProductSvc::new();
        service.expect_add_product().never();
        let use_case = CreateProductUseCaseImpl {
            service: Arc::new(service),
            authorizer: Arc::new(DenyAll),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Principal::customer("alice"))).await;

        assert!(matches!(result, Err(ProductError::Forbidden)));
    }
}
