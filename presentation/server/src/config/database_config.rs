use std::env;
use std::sync::Arc;

use anyhow::Context;
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Where products are stored.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. When unset, products live in
///   process memory and are lost on restart.
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory with SQL migrations
///   (default: "infrastructure/persistence/migrations")
/// - SEED_SAMPLE_PRODUCTS: Fill the in-memory store with sample products
///   (default: "true")
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    Postgres {
        url: String,
        max_connections: u32,
        migrations_path: String,
    },
    InMemory {
        seed_sample_products: bool,
    },
}

impl StoreConfig {
    pub fn from_env() -> Self {
        match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => StoreConfig::Postgres {
                url,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(5),
                migrations_path: env::var("MIGRATIONS_PATH")
                    .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string()),
            },
            _ => StoreConfig::InMemory {
                seed_sample_products: parse_flag(env::var("SEED_SAMPLE_PRODUCTS").ok(), true),
            },
        }
    }
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some("1") | Some("true") | Some("yes") => true,
        Some("0") | Some("false") | Some("no") => false,
        _ => default,
    }
}

/// Opens the configured store, applying migrations for PostgreSQL.
///
/// # Errors
/// Returns error if the database is unreachable or a migration fails
pub async fn init_product_repository(
    config: &StoreConfig,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config {
        StoreConfig::Postgres {
            url,
            max_connections,
            migrations_path,
        } => {
            let pool = create_postgres_pool(
                &DatabaseConfig::new(url.clone()).with_max_connections(*max_connections),
            )
            .await
            .context("failed to connect to DATABASE_URL")?;
            run_migrations(&pool, migrations_path)
                .await
                .with_context(|| format!("failed to apply migrations from {migrations_path}"))?;
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        StoreConfig::InMemory {
            seed_sample_products,
        } => {
            tracing::warn!("DATABASE_URL is not set, products are kept in memory");
            if *seed_sample_products {
                Ok(Arc::new(ProductRepositoryInMemory::with_sample_products()))
            } else {
                Ok(Arc::new(ProductRepositoryInMemory::new()))
            }
        }
    }
}
