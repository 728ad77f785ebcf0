use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::service::ProductService;
use crate::domain::product::value_objects::{ProductId, parse_price};
use crate::domain::shared::value_objects::UserId;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn list_products(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
        async fn add_product(&self, product: &Product) -> Result<ProductId, RepositoryError>;
        async fn update_product(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn delete_product(&self, id: ProductId) -> Result<bool, RepositoryError>;
        async fn buy_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    }
}

mock! {
    pub ProductSvc {}

    #[async_trait]
    impl ProductService for ProductSvc {
        async fn get_all_products(&self) -> Result<Vec<Product>, ProductError>;
        async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;
        async fn does_product_id_exist(&self, id: ProductId) -> Result<bool, ProductError>;
        async fn add_product(&self, product: &Product) -> Result<ProductId, ProductError>;
        async fn update_product(&self, product: &Product) -> Result<Product, ProductError>;
        async fn delete_product_by_id(&self, id: ProductId) -> Result<bool, ProductError>;
        async fn buy_product_by_id(&self, id: ProductId) -> Result<Product, ProductError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(id: i32, owner: &str, quantity: i32) -> Product {
    Product::from_repository(
        ProductId::new(id),
        UserId::new(owner),
        "Espresso machine".to_string(),
        "15 bar pump, steam wand".to_string(),
        "CoffeeCo".to_string(),
        parse_price("189.00").unwrap(),
        quantity,
        "/images/espresso.png".to_string(),
        Utc::now(),
        Utc::now(),
    )
}
