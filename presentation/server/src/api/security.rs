use std::collections::HashSet;
use std::sync::Arc;

use business::domain::shared::principal::Principal;

use crate::config::auth_config::AuthConfig;

/// Header carrying the caller's user id. Issuing and verifying that id is
/// left to whatever sits in front of the service.
///
/// Browsers cannot attach this header to a plain HTML form post, so the
/// server-rendered pages only work behind a proxy (or gateway) that
/// authenticates the user and injects `X-User-Id` on every request. Without
/// one, every create, edit and delete page answers Forbidden.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Turns the identity header of a request into a [`Principal`].
#[derive(Clone)]
pub struct PrincipalResolver {
    administrators: Arc<HashSet<String>>,
}

impl PrincipalResolver {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            administrators: Arc::new(config.admin_user_ids.clone()),
        }
    }

    /// Absent or blank ids resolve to [`Principal::Anonymous`].
    pub fn resolve(&self, user_id: Option<&str>) -> Principal {
        match user_id.map(str::trim) {
            None | Some("") => Principal::Anonymous,
            Some(id) if self.administrators.contains(id) => Principal::administrator(id),
            Some(id) => Principal::customer(id),
        }
    }

    pub fn resolve_request(&self, req: &poem::Request) -> Principal {
        self.resolve(req.header(USER_ID_HEADER))
    }
}
