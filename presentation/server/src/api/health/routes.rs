use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" or "unavailable"
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Products in the catalog, absent when the store could not be read
    pub products: Option<u32>,
}

#[derive(ApiResponse)]
pub enum HealthCheckResult {
    #[oai(status = 200)]
    Healthy(Json<HealthCheckResponse>),
    /// The product store did not answer
    #[oai(status = 503)]
    Unavailable(Json<HealthCheckResponse>),
}

/// Readiness of the catalog: answers only once the product store can be read.
pub struct HealthApi {
    catalog: Arc<dyn GetAllProductsUseCase>,
}

impl HealthApi {
    pub fn new(catalog: Arc<dyn GetAllProductsUseCase>) -> Self {
        Self { catalog }
    }
}

fn report(status: &str, products: Option<u32>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: status.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        products,
    })
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Public. Reads the catalog once and reports how many products it holds.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthCheckResult {
        match self.catalog.execute().await {
            Ok(products) => HealthCheckResult::Healthy(report(
                "healthy",
                Some(u32::try_from(products.len()).unwrap_or(u32::MAX)),
            )),
            Err(err) => {
                tracing::error!("Health check could not read the catalog: {}", err);
                HealthCheckResult::Unavailable(report("unavailable", None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use poem::http::StatusCode;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    use business::domain::errors::RepositoryError;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;

    use super::*;

    struct StoreDown;

    #[async_trait]
    impl GetAllProductsUseCase for StoreDown {
        async fn execute(&self) -> Result<Vec<Product>, ProductError> {
            Err(ProductError::Repository(RepositoryError::DatabaseError))
        }
    }

    #[tokio::test]
    async fn should_report_unavailable_when_store_fails() {
        let api = OpenApiService::new(HealthApi::new(Arc::new(StoreDown)), "health", "test");
        let cli = TestClient::new(Route::new().nest("/", api));

        let resp = cli.get("/health").send().await;

        resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("status").assert_string("unavailable");
    }
}
