use std::collections::HashSet;
use std::env;

/// Who counts as an administrator when a request is authorized.
///
/// Environment variables:
/// - ADMIN_USER_IDS: Comma-separated user ids granted the administrator role
///   (default: none)
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub admin_user_ids: HashSet<String>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self::from_list(&env::var("ADMIN_USER_IDS").unwrap_or_default())
    }

    pub fn from_list(list: &str) -> Self {
        let admin_user_ids = list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        Self { admin_user_ids }
    }
}
