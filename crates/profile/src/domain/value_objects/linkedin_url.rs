// crates/profile/src/domain/value_objects/linkedin_url.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::{Url, ValueObject};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::reason_of;

const LINKEDIN_DOMAIN: &str = "linkedin.com";

/// Lien vers un profil LinkedIn (linkedin.com ou un sous-domaine, ex: fr.linkedin.com)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct LinkedinUrl(Url);

impl LinkedinUrl {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let url = Url::try_new(value).map_err(|e| invalid(reason_of(&e)))?;
        let linkedin = Self(url);
        linkedin.validate()?;
        Ok(linkedin)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(Url::new_unchecked(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn invalid(reason: impl fmt::Display) -> DomainError {
    DomainError::Validation {
        field: "linkedin_profile_url",
        reason: format!("Invalid LinkedIn URL: {}", reason),
    }
}

impl ValueObject for LinkedinUrl {
    fn validate(&self) -> Result<()> {
        self.0.validate().map_err(|e| invalid(reason_of(&e)))?;

        let host = self.0.host().unwrap_or_default();
        let on_domain = host == LINKEDIN_DOMAIN || host.ends_with(&format!(".{}", LINKEDIN_DOMAIN));
        if !on_domain {
            return Err(invalid(format!("host must be linkedin.com, got '{}'", host)));
        }

        if self.0.path().is_empty() {
            return Err(invalid("URL must point to a LinkedIn profile"));
        }

        Ok(())
    }
}

impl TryFrom<String> for LinkedinUrl {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<LinkedinUrl> for String {
    fn from(url: LinkedinUrl) -> Self {
        url.0.into()
    }
}

impl fmt::Display for LinkedinUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
