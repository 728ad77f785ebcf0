use bigdecimal::BigDecimal;
use serde::Deserialize;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::{ProductId, parse_price, parse_quantity};
use business::domain::shared::principal::Principal;

/// Product form as posted by the browser. Every field arrives as text;
/// missing fields are treated as empty so validation can report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductFormData {
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: String,
    pub quantity: String,
    pub image_url: String,
}

/// Form values after price and quantity were parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProductForm {
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image_url: String,
}

impl ProductFormData {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            seller: product.seller.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            image_url: product.image_url.clone(),
        }
    }

    /// Parses the numeric fields. Text fields are checked by the domain.
    pub fn parse(&self) -> Result<ParsedProductForm, ProductError> {
        Ok(ParsedProductForm {
            title: self.title.clone(),
            description: self.description.clone(),
            seller: self.seller.clone(),
            price: parse_price(&self.price)?,
            quantity: parse_quantity(&self.quantity)?,
            image_url: self.image_url.clone(),
        })
    }
}

impl ParsedProductForm {
    pub fn into_create_params(self, principal: Principal) -> CreateProductParams {
        CreateProductParams {
            principal,
            id: ProductId::UNSET,
            title: self.title,
            description: self.description,
            seller: self.seller,
            price: self.price,
            quantity: self.quantity,
            image_url: self.image_url,
        }
    }

    /// The edit form always posts every field, so all of them are replaced.
    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            title: Some(self.title),
            description: Some(self.description),
            seller: Some(self.seller),
            price: Some(self.price),
            quantity: Some(self.quantity),
            image_url: Some(self.image_url),
        }
    }
}
