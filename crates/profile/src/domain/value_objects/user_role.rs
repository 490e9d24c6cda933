// crates/profile/src/domain/value_objects/user_role.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Niveau d'autorisation porté par la session de l'appelant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User = 0,
    Manager = 20,
    Admin = 30,
}

impl UserRole {
    pub fn try_new(value: &str) -> Result<Self> {
        Self::from_str(value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    // --- LOGIQUE DE PERMISSIONS ---

    pub fn has_permission_of(&self, other: UserRole) -> bool {
        *self >= other
    }

    /// Modifier le profil d'un autre utilisateur
    pub fn can_manage_profiles(&self) -> bool {
        self.has_permission_of(Self::Manager)
    }

    pub fn can_change_professional_status(&self) -> bool {
        self.has_permission_of(Self::Manager)
    }
}

impl ValueObject for UserRole {
    fn validate(&self) -> Result<()> {
        // L'enum garantit par construction la validité des variantes
        Ok(())
    }
}

// --- CONVERSIONS ---

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "authenticated" => Ok(Self::User),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::Validation {
                field: "role",
                reason: format!("Unknown user role: {}", s),
            }),
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::from_str(&value)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
