// crates/shared-kernel/src/domain/value_objects/user_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use crate::domain::Identifier;
use crate::domain::entities::EntityMetadata;
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

/// Identifiant opaque d'un utilisateur, basé sur UUID v7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Génère un nouvel UUID v7 (Séquentiel, optimisé pour les index)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Reconstruction depuis un type sûr (Interne / Stockage)
    pub fn new_unchecked(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Validation et création depuis une String (API / Entrée externe)
    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let s = id.into();
        let id = Self::from_str(&s)?;
        id.validate()?;
        Ok(id)
    }
}

impl Identifier for UserId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl ValueObject for UserId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: "User ID cannot be nil".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

// --- CONVERSIONS ---

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for UserId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "user_id",
                reason: format!("'{}' is not a valid UUID", s),
            })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EntityMetadata for UserId {
    fn entity_name() -> &'static str {
        "User"
    }
}
