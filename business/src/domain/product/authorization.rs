use strum_macros::Display;

use super::model::Product;
use crate::domain::shared::principal::Principal;

/// Operation kinds that require a policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ProductOperation {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    Allow,
    Deny,
}

impl AuthorizationDecision {
    pub fn is_allowed(self) -> bool {
        self == AuthorizationDecision::Allow
    }
}

pub trait ProductAuthorizer: Send + Sync {
    fn authorize(
        &self,
        principal: &Principal,
        product: &Product,
        operation: ProductOperation,
    ) -> AuthorizationDecision;
}

/// Any signed-in user may list products for sale; only the owner or an
/// administrator may change or remove them.
#[derive(Debug, Default, Clone, Copy)]
pub struct OwnershipPolicy;

impl ProductAuthorizer for OwnershipPolicy {
    fn authorize(
        &self,
        principal: &Principal,
        product: &Product,
        operation: ProductOperation,
    ) -> AuthorizationDecision {
        let Some(user_id) = principal.user_id() else {
            return AuthorizationDecision::Deny;
        };

        let allowed = match operation {
            ProductOperation::Create => true,
            ProductOperation::Update | ProductOperation::Delete => {
                principal.is_administrator() || product.is_owned_by(user_id)
            }
        };

        if allowed {
            AuthorizationDecision::Allow
        } else {
            AuthorizationDecision::Deny
        }
    }
}
