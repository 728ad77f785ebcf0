use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod security;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod auth_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod server_config;
}
mod setup {
    pub mod app;
    pub mod dependency_injection;
    pub mod server;
}
mod web {
    pub mod forms;
    pub mod routes;
    pub mod views;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Catalog server entry point
///
/// Serves the JSON API under `/api` and the server-rendered pages under
/// `/products`, both backed by the same use cases:
/// - config/: Environment configuration (server, CORS, store, administrators)
/// - setup/: Dependency wiring, route table and listener
/// - api/: OpenAPI handlers and DTOs
/// - web/: HTML handlers, forms and templates
///
/// Callers are identified only by the `X-User-Id` header. A fronting proxy
/// must authenticate users and set it, since browser forms cannot.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from .env too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Open the product store
    let repository = database_config::init_product_repository(&config.store).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(repository, &config.auth);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
