// crates/profile/src/domain/value_objects/person_name.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::markup::{find_sql_meta_sequence, strip_markup};

/// Prénom ou nom de famille.
/// Le balisage est retiré, le reste du contenu Unicode est conservé tel quel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    pub const MAX_LENGTH: usize = 100;

    /// Constructeur sécurisé, erreurs rapportées sur le champ générique "name"
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        Self::try_new_for_field("name", value)
    }

    /// Constructeur sécurisé (API), erreurs rapportées sur `field` (ex: "first_name")
    pub fn try_new_for_field(field: &'static str, value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // 1. Nettoyage du balisage puis des espaces de bord
        let stripped = strip_markup(&raw);
        let trimmed = stripped.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Validation {
                field,
                reason: "Name cannot be empty".into(),
            });
        }

        // 2. Validation
        let name = Self(trimmed.to_string());
        name.check(field)?;
        Ok(name)
    }

    /// Reconstruction rapide (Infrastructure / Stockage)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn check(&self, field: &'static str) -> Result<()> {
        // On compte les caractères Unicode réels, pas les octets
        let count = self.0.chars().count();

        if count == 0 {
            return Err(DomainError::Validation {
                field,
                reason: "Name cannot be empty".into(),
            });
        }

        if count > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field,
                reason: format!("Name is too long (max {} chars, got {})", Self::MAX_LENGTH, count),
            });
        }

        if self.0.chars().any(char::is_control) {
            return Err(DomainError::Validation {
                field,
                reason: "Name contains invalid control characters".into(),
            });
        }

        if let Some(seq) = find_sql_meta_sequence(&self.0) {
            return Err(DomainError::Validation {
                field,
                reason: format!("Name contains a forbidden character sequence '{}'", seq),
            });
        }

        Ok(())
    }
}

impl ValueObject for PersonName {
    fn validate(&self) -> Result<()> {
        self.check("name")
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for PersonName {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
