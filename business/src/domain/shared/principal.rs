use strum_macros::{Display, EnumString};

use super::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Customer,
    Administrator,
}

/// The caller on whose behalf a request runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    Authenticated { user_id: UserId, role: Role },
}

impl Principal {
    pub fn customer(user_id: impl Into<UserId>) -> Self {
        Principal::Authenticated {
            user_id: user_id.into(),
            role: Role::Customer,
        }
    }

    pub fn administrator(user_id: impl Into<UserId>) -> Self {
        Principal::Authenticated {
            user_id: user_id.into(),
            role: Role::Administrator,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Principal::Anonymous => None,
            Principal::Authenticated { user_id, .. } => Some(user_id),
        }
    }

    pub fn is_administrator(&self) -> bool {
        matches!(
            self,
            Principal::Authenticated {
                role: Role::Administrator,
                ..
            }
        )
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Principal::Anonymous => write!(f, "anonymous"),
            Principal::Authenticated { user_id, role } => write!(f, "{} ({})", user_id, role),
        }
    }
}
