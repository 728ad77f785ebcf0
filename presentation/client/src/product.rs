use serde::{Deserialize, Serialize};

/// Product as exchanged with the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 0 until the server assigns an id
    pub product_id: i32,
    pub title: String,
    pub description: String,
    pub seller: String,
    pub price: f64,
    pub quantity: i32,
    pub image_url: String,
}
