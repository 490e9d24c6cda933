// crates/shared-kernel/src/domain/value_objects/url.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use url::Url as LibUrl;
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

/// URL absolue http(s), stockée sous sa forme normalisée.
/// Les valeurs porteuses de balisage sont rejetées, jamais nettoyées.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Url(String);

impl Url {
    pub const MAX_LEN: usize = 2048;

    /// Constructeur sécurisé (Domaine / API)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let trimmed = raw.trim();

        // 1. Filtrage des caractères interdits avant tout parsing :
        // le crate 'url' encoderait silencieusement '<' ou '"'
        if trimmed.is_empty() {
            return Err(invalid("URL cannot be empty"));
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(invalid(format!("URL cannot exceed {} characters", Self::MAX_LEN)));
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| matches!(c, '<' | '>' | '"' | '\'' | '`') || c.is_whitespace() || c.is_control())
        {
            return Err(invalid(format!("URL contains a forbidden character {:?}", c)));
        }

        // 2. Parsing pour normalisation syntaxique
        let parsed = LibUrl::parse(trimmed)
            .map_err(|_| invalid(format!("Invalid URL format: {}", trimmed)))?;

        let url = Self(parsed.to_string());

        // 3. Validation métier stricte
        url.validate()?;

        Ok(url)
    }

    /// Reconstruction rapide (Infrastructure / Stockage)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hôte en minuscules (ex: "github.com")
    pub fn host(&self) -> Option<String> {
        LibUrl::parse(&self.0)
            .ok()
            .and_then(|u| u.host_str().map(str::to_lowercase))
    }

    /// Chemin sans le '/' final (ex: "/octocat")
    pub fn path(&self) -> String {
        LibUrl::parse(&self.0)
            .map(|u| u.path().trim_end_matches('/').to_string())
            .unwrap_or_default()
    }
}

fn invalid(reason: impl Into<String>) -> DomainError {
    DomainError::Validation {
        field: "url",
        reason: reason.into(),
    }
}

impl ValueObject for Url {
    fn validate(&self) -> Result<()> {
        let parsed = LibUrl::parse(&self.0).map_err(|_| invalid("Invalid URL state"))?;

        // On restreint les protocoles
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(invalid("Only http and https protocols are allowed"));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("URL must contain a host"));
        }

        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(invalid("URL cannot embed credentials"));
        }

        Ok(())
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Url {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0
    }
}
