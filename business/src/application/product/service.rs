use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::service::ProductService;
use crate::domain::product::value_objects::ProductId;

pub struct ProductServiceImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

fn map_repository_error(error: RepositoryError) -> ProductError {
    match error {
        RepositoryError::NotFound => ProductError::NotFound,
        RepositoryError::InvalidInput => ProductError::Rejected,
        other => ProductError::Repository(other),
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository
            .list_products()
            .await
            .map_err(map_repository_error)
    }

    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.repository
            .get_product(id)
            .await
            .map_err(map_repository_error)
    }

    async fn does_product_id_exist(&self, id: ProductId) -> Result<bool, ProductError> {
        Ok(self.get_product_by_id(id).await?.is_some())
    }

    async fn add_product(&self, product: &Product) -> Result<ProductId, ProductError> {
        let id = self
            .repository
            .add_product(product)
            .await
            .map_err(map_repository_error)?;
        self.logger.debug(&format!("Stored product {}", id));
        Ok(id)
    }

    async fn update_product(&self, product: &Product) -> Result<Product, ProductError> {
        self.repository
            .update_product(product)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_product_by_id(&self, id: ProductId) -> Result<bool, ProductError> {
        self.repository
            .delete_product(id)
            .await
            .map_err(map_repository_error)
    }

    async fn buy_product_by_id(&self, id: ProductId) -> Result<Product, ProductError> {
        match self
            .repository
            .buy_product(id)
            .await
            .map_err(map_repository_error)?
        {
            Some(product) => Ok(product),
            // Nothing was decremented: either the id is unknown or stock is gone.
            None if self.does_product_id_exist(id).await? => {
                self.logger
                    .warn(&format!("Product {} is out of stock", id));
                Err(ProductError::OutOfStock)
            }
            None => Err(ProductError::NotFound),
        }
    }
}
