// crates/profile/src/domain/value_objects/bio.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use crate::domain::value_objects::markup::strip_markup;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Bio(String);

impl Bio {
    pub const MAX_LENGTH: usize = 500;

    /// Constructeur sécurisé (API / Mise à jour profil)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // 1. Le balisage est retiré, le texte conservé
        let stripped = strip_markup(&raw);
        let trimmed = stripped.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Validation {
                field: "bio",
                reason: "Bio cannot be empty. Use null to remove the bio.".into(),
            });
        }

        // 2. Normalisation des sauts de ligne avant validation de longueur
        let normalized = Self::normalize_newlines(trimmed);

        let bio = Self(normalized);
        bio.validate()?;
        Ok(bio)
    }

    /// Reconstruction rapide (Infrastructure / Stockage)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// "\r\n" compte pour un seul saut ; au-delà de 2 sauts consécutifs on tronque.
    fn normalize_newlines(input: &str) -> String {
        let unified = input.replace("\r\n", "\n").replace('\r', "\n");
        let mut result = String::with_capacity(unified.len());
        let mut newline_count = 0;
        for c in unified.chars() {
            if c == '\n' {
                newline_count += 1;
                if newline_count <= 2 {
                    result.push('\n');
                }
            } else {
                newline_count = 0;
                result.push(c);
            }
        }
        result
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Bio {
    fn validate(&self) -> Result<()> {
        let count = self.0.chars().count();

        if count == 0 {
            return Err(DomainError::Validation {
                field: "bio",
                reason: "Bio cannot be empty. Use null to remove the bio.".into(),
            });
        }

        if count > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "bio",
                reason: format!(
                    "Bio is too long (max {} chars, got {})",
                    Self::MAX_LENGTH,
                    count
                ),
            });
        }

        // Caractères de contrôle interdits (hors sauts de ligne et tabulations)
        if self.0.chars().any(|c| c.is_control() && c != '\n' && c != '\t') {
            return Err(DomainError::Validation {
                field: "bio",
                reason: "Bio contains invalid control characters".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Bio {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Bio> for String {
    fn from(bio: Bio) -> Self {
        bio.0
    }
}

impl fmt::Display for Bio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
