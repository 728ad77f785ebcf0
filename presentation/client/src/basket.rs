use tokio::sync::RwLock;

use crate::product::Product;

/// Products the shopper picked, shared between views.
#[derive(Default)]
pub struct BasketService {
    products: RwLock<Vec<Product>>,
}

impl BasketService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, product: Product) {
        self.products.write().await.push(product);
    }

    /// Removes the entry at `index`, if there is one.
    pub async fn remove_at(&self, index: usize) -> Option<Product> {
        let mut products = self.products.write().await;
        (index < products.len()).then(|| products.remove(index))
    }

    pub async fn count(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn total(&self) -> f64 {
        self.products
            .read()
            .await
            .iter()
            .map(|product| product.price)
            .sum()
    }

    pub async fn clear(&self) {
        self.products.write().await.clear();
    }
}

/// Basket page state.
#[derive(Debug, Default)]
pub struct BasketView {
    pub products: Vec<Product>,
}

impl BasketView {
    pub async fn load(&mut self, basket: &BasketService) {
        self.products = basket.products().await;
    }
}
