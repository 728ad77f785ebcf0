use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::{ProductId, price_from_f64, price_to_f64};
use business::domain::shared::principal::Principal;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Must be absent or 0; the server assigns the id
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<i32>,
    /// Product title (cannot be empty)
    pub title: String,
    /// Description (cannot be empty)
    pub description: String,
    /// Seller name (cannot be empty)
    pub seller: String,
    /// Unit price, at least 0.01
    pub price: f64,
    /// Units in stock, at least 1
    pub quantity: i32,
    /// Image location (cannot be empty)
    pub image_url: String,
}

impl CreateProductRequest {
    pub fn into_params(self, principal: Principal) -> Result<CreateProductParams, ProductError> {
        Ok(CreateProductParams {
            principal,
            id: self.product_id.map(ProductId::new).unwrap_or_default(),
            title: self.title,
            description: self.description,
            seller: self.seller,
            price: price_from_f64(self.price)?,
            quantity: self.quantity,
            image_url: self.image_url,
        })
    }
}

/// Partial edit. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// When present, must equal the id in the path
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub seller: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Units in stock, may be 0
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl UpdateProductRequest {
    pub fn body_id(&self) -> Option<ProductId> {
        self.product_id.map(ProductId::new)
    }

    pub fn into_changes(self) -> Result<ProductChanges, ProductError> {
        Ok(ProductChanges {
            title: self.title,
            description: self.description,
            seller: self.seller,
            price: self.price.map(price_from_f64).transpose()?,
            quantity: self.quantity,
            image_url: self.image_url,
        })
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: i32,
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: f64,
    pub quantity: i32,
    pub image_url: String,
    /// User who created the product
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.id.value(),
            price: price_to_f64(&product.price),
            owner_id: product.owner_id.as_str().to_string(),
            title: product.title,
            description: product.description,
            seller: product.seller,
            quantity: product.quantity,
            image_url: product.image_url,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
