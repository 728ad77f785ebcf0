use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::setup::dependency_injection::DependencyContainer;
use crate::web;

/// Route table shared by the listener and the tests. Middleware is added by
/// the caller.
pub fn build_app(container: DependencyContainer, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (container.health_api, container.product_api),
        "Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/api", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .nest("/", web::routes::routes())
        .data(container.product_pages)
}
