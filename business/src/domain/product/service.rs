use async_trait::async_trait;

use super::errors::ProductError;
use super::model::Product;
use super::value_objects::ProductId;

/// Product operations exposed to the controllers.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError>;
    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;
    async fn does_product_id_exist(&self, id: ProductId) -> Result<bool, ProductError>;
    async fn add_product(&self, product: &Product) -> Result<ProductId, ProductError>;
    async fn update_product(&self, product: &Product) -> Result<Product, ProductError>;
    async fn delete_product_by_id(&self, id: ProductId) -> Result<bool, ProductError>;
    async fn buy_product_by_id(&self, id: ProductId) -> Result<Product, ProductError>;
}
