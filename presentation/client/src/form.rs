use business::domain::product::errors::ProductError;
use business::domain::product::value_objects::{
    MIN_PRICE, parse_price, parse_quantity, price_to_f64,
};

use crate::product::Product;

/// Add-product form. Values are kept as typed until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: String,
    pub quantity: String,
    pub image_url: String,
}

fn required(value: &str, error: ProductError) -> Result<String, ProductError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(error);
    }
    Ok(value.to_string())
}

impl ProductForm {
    /// Checks every field and builds the product to send. The id is 0 so the
    /// server assigns one.
    pub fn to_product(&self) -> Result<Product, ProductError> {
        let title = required(&self.title, ProductError::TitleEmpty)?;
        let description = required(&self.description, ProductError::DescriptionEmpty)?;
        let seller = required(&self.seller, ProductError::SellerEmpty)?;
        let image_url = required(&self.image_url, ProductError::ImageUrlEmpty)?;

        let price = parse_price(&self.price)?;
        if price < parse_price(MIN_PRICE)? {
            return Err(ProductError::PriceNotPositive);
        }
        let quantity = parse_quantity(&self.quantity)?;
        if quantity < 1 {
            return Err(ProductError::QuantityTooLow);
        }

        Ok(Product {
            product_id: 0,
            title,
            description,
            seller,
            price: price_to_f64(&price),
            quantity,
            image_url,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.to_product().is_ok()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
