// crates/profile/src/domain/entities/session.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;
use crate::domain::entities::Actor;
use crate::domain::value_objects::UserRole;

/// Jeton opaque associant un porteur à une identité et un rôle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub role: UserRole,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: UserId, role: UserRole) -> Self {
        Self {
            token: token.into(),
            user_id,
            role,
            issued_at: Utc::now(),
        }
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}
