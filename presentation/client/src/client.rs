use std::time::Duration;

use reqwest::{Client, RequestBuilder};

/// Header naming the user on whose behalf requests are made.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Shared HTTP configuration for the catalog API.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
    pub user_id: Option<String>,
}

impl CatalogClient {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn product_url(&self, id: i32) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    pub fn buy_url(&self, id: i32) -> String {
        format!("{}/products/{}/buy", self.base_url, id)
    }

    /// Adds the identity header when a user is set.
    pub fn identify(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.user_id {
            Some(user_id) => request.header(USER_ID_HEADER, user_id),
            None => request,
        }
    }
}
