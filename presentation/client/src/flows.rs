use std::sync::Arc;

use crate::error::ClientError;
use crate::form::ProductForm;
use crate::gateway::ProductGateway;

/// Submission of the add-product form.
pub struct AddProductFlow {
    gateway: Arc<dyn ProductGateway>,
}

impl AddProductFlow {
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self { gateway }
    }

    /// Sends the form's product and returns the route of the created product,
    /// e.g. `/products/7`. The form is cleared only after the server accepted
    /// the product; on any failure it keeps what the user typed.
    pub async fn submit(&self, form: &mut ProductForm) -> Result<String, ClientError> {
        let product = form.to_product()?;
        tracing::debug!("Submitting product: {}", product.title);

        let created = self.gateway.add_product(&product).await?;
        tracing::info!("Product added with id {}", created.product_id);

        form.reset();
        Ok(format!("/products/{}", created.product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    use crate::product::Product;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl ProductGateway for Gateway {
            async fn list_products(&self) -> Result<Vec<Product>, ClientError>;
            async fn get_product(&self, id: i32) -> Result<Product, ClientError>;
            async fn add_product(&self, product: &Product) -> Result<Product, ClientError>;
            async fn buy_product(&self, id: i32) -> Result<Product, ClientError>;
        }
    }

    fn filled_form() -> ProductForm {
        ProductForm {
            title: "TestTitle".to_string(),
            description: "Stoneware".to_string(),
            seller: "Pottery Studio".to_string(),
            price: "4.50".to_string(),
            quantity: "1".to_string(),
            image_url: "/images/mug.png".to_string(),
        }
    }

    #[tokio::test]
    async fn should_navigate_to_created_product_and_reset_form() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_product()
            .withf(|product| product.product_id == 0 && product.price == 4.5)
            .times(1)
            .returning(|product| {
                let mut created = product.clone();
                created.product_id = 7;
                Ok(created)
            });
        let flow = AddProductFlow::new(Arc::new(gateway));
        let mut form = filled_form();

        let route = flow.submit(&mut form).await.unwrap();

        assert_eq!(route, "/products/7");
        assert_eq!(form, ProductForm::default());
    }

    #[tokio::test]
    async fn should_not_send_invalid_form() {
        let mut gateway = MockGateway::new();
        gateway.expect_add_product().never();
        let flow = AddProductFlow::new(Arc::new(gateway));
        let mut form = filled_form();
        form.title = String::new();

        let result = flow.submit(&mut form).await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert!(form.title.is_empty());
        assert_eq!(form.seller, "Pottery Studio");
    }

    #[tokio::test]
    async fn should_keep_form_when_server_refuses() {
        let mut gateway = MockGateway::new();
        gateway.expect_add_product().times(1).returning(|_| {
            Err(ClientError::Status {
                status: 403,
                message: "product.forbidden".to_string(),
            })
        });
        let flow = AddProductFlow::new(Arc::new(gateway));
        let mut form = filled_form();

        let result = flow.submit(&mut form).await;

        assert!(matches!(result, Err(ClientError::Status { status: 403, .. })));
        assert_eq!(form, filled_form());
    }
}
