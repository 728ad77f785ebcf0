use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:4200,http://localhost:8080";

/// CORS for the storefront client running on another origin.
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:4200,http://localhost:8080")
///
/// The identity header must be allowed and `Location` exposed, otherwise the
/// client can neither act as a user nor follow a created product.
pub fn init_cors() -> Cors {
    let origins = allowed_origins(env::var("CORS_ALLOWED_ORIGINS").ok());

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "x-user-id"])
        .expose_headers(vec!["location"])
}

fn allowed_origins(raw: Option<String>) -> Vec<String> {
    let origins: Vec<String> = raw
        .as_deref()
        .unwrap_or(DEFAULT_ORIGINS)
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        return allowed_origins(None);
    }
    origins
}
