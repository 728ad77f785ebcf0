use poem::{EndpointExt, Server as PoemServer, listener::TcpListener, middleware::Tracing};

use crate::{
    config::app_config::AppConfig,
    setup::{app::build_app, dependency_injection::DependencyContainer},
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(container, format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Catalog pages at http://{}/products", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
