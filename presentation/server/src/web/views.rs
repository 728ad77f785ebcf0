use askama::Template;
use poem::http::StatusCode;
use poem::web::Html;
use poem::{IntoResponse, Response};

use business::domain::product::model::Product;

use super::forms::ProductFormData;

/// Product fields as shown on the pages.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: String,
    pub quantity: i32,
    pub image_url: String,
    pub owner_id: String,
    pub in_stock: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title.clone(),
            description: product.description.clone(),
            seller: product.seller.clone(),
            price: product.price.with_scale(2).to_string(),
            quantity: product.quantity,
            image_url: product.image_url.clone(),
            owner_id: product.owner_id.as_str().to_string(),
            in_stock: product.is_in_stock(),
        }
    }
}

#[derive(Template)]
#[template(path = "products/index.html")]
pub struct IndexTemplate {
    pub products: Vec<ProductView>,
}

#[derive(Template)]
#[template(path = "products/details.html")]
pub struct DetailsTemplate {
    pub product: ProductView,
}

/// Shared by the create and edit pages.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct FormTemplate {
    pub heading: String,
    pub action: String,
    pub form: ProductFormData,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "products/delete.html")]
pub struct DeleteTemplate {
    pub product: ProductView,
}

/// Not-found, forbidden and failure pages.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    pub title: String,
    pub message: String,
}

impl StatusTemplate {
    pub fn not_found() -> Self {
        Self {
            title: "Not found".to_string(),
            message: "product.not_found".to_string(),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            title: "Forbidden".to_string(),
            message: "product.forbidden".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Something went wrong".to_string(),
            message: message.into(),
        }
    }
}

/// Renders `template` as the body of a response with `status`.
pub fn render<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(body) => Html(body).with_status(status).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
