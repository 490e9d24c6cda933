// crates/profile/src/domain/value_objects/github_url.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::{Url, ValueObject};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::reason_of;

const ALLOWED_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Lien vers un compte GitHub (https://github.com/<compte>)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct GithubUrl(Url);

impl GithubUrl {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let url = Url::try_new(value).map_err(|e| invalid(reason_of(&e)))?;
        let github = Self(url);
        github.validate()?;
        Ok(github)
    }

    /// Reconstruction rapide (Infrastructure / Stockage)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(Url::new_unchecked(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

fn invalid(reason: impl fmt::Display) -> DomainError {
    DomainError::Validation {
        field: "github_profile_url",
        reason: format!("Invalid GitHub URL: {}", reason),
    }
}

impl ValueObject for GithubUrl {
    fn validate(&self) -> Result<()> {
        self.0.validate().map_err(|e| invalid(reason_of(&e)))?;

        let host = self.0.host().unwrap_or_default();
        if !ALLOWED_HOSTS.contains(&host.as_str()) {
            return Err(invalid(format!("host must be github.com, got '{}'", host)));
        }

        if self.0.path().is_empty() {
            return Err(invalid("URL must point to a GitHub account"));
        }

        Ok(())
    }
}

impl TryFrom<String> for GithubUrl {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<GithubUrl> for String {
    fn from(url: GithubUrl) -> Self {
        url.0.into()
    }
}

impl fmt::Display for GithubUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
