// crates/profile/src/domain/value_objects/email.rs

use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

// Partie locale sans point en tête, en fin ou doublé ; domaine avec TLD obligatoire
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MAX_LEN: usize = 254;
    pub const MAX_LOCAL_LEN: usize = 64;

    /// Constructeur sécurisé (API). Jamais nettoyé : une valeur invalide est rejetée.
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // 1. Normalisation (NFC + Lowercase + Trim)
        let normalized: String = raw.trim()
            .nfc()
            .collect::<String>()
            .to_lowercase();

        let email = Self::new_unchecked(normalized);

        // 2. Validation
        email.validate()?;

        Ok(email)
    }

    /// Reconstruction rapide (Infrastructure / Stockage)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit('@').next().unwrap_or("")
    }
}

impl ValueObject for Email {
    fn validate(&self) -> Result<()> {
        let len = self.0.len();

        if len == 0 || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "email",
                reason: format!("Email length must be between 1 and {} chars", Self::MAX_LEN),
            });
        }

        let local_len = self.0.split('@').next().map(str::len).unwrap_or(0);
        if local_len > Self::MAX_LOCAL_LEN || !EMAIL_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "email",
                reason: "Invalid email format".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Email {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
