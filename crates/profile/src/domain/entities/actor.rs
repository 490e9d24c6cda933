// crates/profile/src/domain/entities/actor.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::UserRole;

/// Identité authentifiée à l'origine d'une requête.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub role: UserRole,
}

impl Actor {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Le propriétaire, ou un manager/admin
    pub fn can_edit_profile_of(&self, owner: &UserId) -> bool {
        self.user_id == *owner || self.role.can_manage_profiles()
    }

    pub fn can_change_professional_status(&self) -> bool {
        self.role.can_change_professional_status()
    }

    pub fn ensure_can_edit_profile_of(&self, owner: &UserId) -> Result<()> {
        if self.can_edit_profile_of(owner) {
            return Ok(());
        }
        Err(DomainError::Forbidden {
            reason: "You are not allowed to update this profile".into(),
        })
    }

    pub fn ensure_can_change_professional_status(&self) -> Result<()> {
        if self.can_change_professional_status() {
            return Ok(());
        }
        Err(DomainError::Forbidden {
            reason: "Only managers and admins can change the professional status".into(),
        })
    }
}
