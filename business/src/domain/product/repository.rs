use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Stores a product whose id is unset and returns the assigned id.
    async fn add_product(&self, product: &Product) -> Result<ProductId, RepositoryError>;
    /// Replaces the stored row with the same id and returns what was stored.
    async fn update_product(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete_product(&self, id: ProductId) -> Result<bool, RepositoryError>;
    /// Decrements the quantity by one when it is above zero. `None` when
    /// nothing was decremented.
    async fn buy_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
}
