use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductId, is_normalized_price, parse_price};
use business::domain::shared::value_objects::UserId;

/// Owner recorded on the products seeded at start-up.
pub const SAMPLE_OWNER: &str = "catalog-admin";

struct Rows {
    next_id: i32,
    products: BTreeMap<ProductId, Product>,
}

/// Process-local store with the same contract as the Postgres adapter.
/// Ids start at 1 and are never reused.
pub struct ProductRepositoryInMemory {
    rows: RwLock<Rows>,
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                next_id: 1,
                products: BTreeMap::new(),
            }),
        }
    }

    /// Store pre-filled with three products, ids 1 to 3.
    pub fn with_sample_products() -> Self {
        let mut products = BTreeMap::new();
        let mut next_id = 1;
        for (title, description, seller, price, quantity) in [
            ("Desk lamp", "LED lamp with dimmer", "Brightside", "34.99", 12),
            ("Notebook", "A5 dotted, 160 pages", "Paperworks", "8.50", 40),
            ("Headphones", "Over-ear, noise cancelling", "SoundLab", "129.00", 3),
        ] {
            let id = ProductId::new(next_id);
            let now = Utc::now();
            products.insert(
                id,
                Product::from_repository(
                    id,
                    UserId::new(SAMPLE_OWNER),
                    title.to_string(),
                    description.to_string(),
                    seller.to_string(),
                    parse_price(price).unwrap_or_default(),
                    quantity,
                    format!("/images/{}.png", title.to_lowercase().replace(' ', "-")),
                    now,
                    now,
                ),
            );
            next_id += 1;
        }

        Self {
            rows: RwLock::new(Rows { next_id, products }),
        }
    }
}

/// Same constraints the Postgres schema enforces.
fn satisfies_constraints(product: &Product) -> bool {
    let texts = [
        &product.title,
        &product.description,
        &product.seller,
        &product.image_url,
    ];
    texts.iter().all(|text| !text.trim().is_empty())
        && is_normalized_price(&product.price)
        && product.quantity >= 0
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.products.values().cloned().collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.products.get(&id).cloned())
    }

    async fn add_product(&self, product: &Product) -> Result<ProductId, RepositoryError> {
        if !satisfies_constraints(product) || product.quantity < 1 {
            return Err(RepositoryError::InvalidInput);
        }

        let mut rows = self.rows.write().await;
        let id = ProductId::new(rows.next_id);
        rows.next_id += 1;
        rows.products.insert(id, product.clone().with_id(id));
        Ok(id)
    }

    async fn update_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        if !satisfies_constraints(product) {
            return Err(RepositoryError::InvalidInput);
        }

        let mut rows = self.rows.write().await;
        let stored = rows
            .products
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound)?;

        stored.title = product.title.clone();
        stored.description = product.description.clone();
        stored.seller = product.seller.clone();
        stored.price = product.price.clone();
        stored.quantity = product.quantity;
        stored.image_url = product.image_url.clone();
        stored.updated_at = product.updated_at;
        Ok(stored.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let mut rows = self.rows.write().await;
        Ok(rows.products.remove(&id).is_some())
    }

    async fn buy_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let mut rows = self.rows.write().await;
        match rows.products.get_mut(&id) {
            Some(product) if product.quantity > 0 => {
                product.quantity -= 1;
                product.updated_at = Utc::now();
                Ok(Some(product.clone()))
            }
            _ => Ok(None),
        }
    }
}
