// crates/profile/src/domain/value_objects/profile_picture_url.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::{Url, ValueObject};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::reason_of;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProfilePictureUrl(Url);

impl ProfilePictureUrl {
    pub const ALLOWED_EXTENSIONS: [&'static str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let url = Url::try_new(value).map_err(|e| invalid(reason_of(&e)))?;
        let picture = Self(url);
        picture.validate()?;
        Ok(picture)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(Url::new_unchecked(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Extension du dernier segment du chemin, en minuscules
    pub fn extension(&self) -> Option<String> {
        let path = self.0.path();
        let file = path.rsplit('/').next()?;
        let (stem, ext) = file.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

fn invalid(reason: impl fmt::Display) -> DomainError {
    DomainError::Validation {
        field: "profile_picture_url",
        reason: format!(
            "Invalid profile picture URL: {} (allowed image extensions: {})",
            reason,
            ProfilePictureUrl::ALLOWED_EXTENSIONS.join(", ")
        ),
    }
}

impl ValueObject for ProfilePictureUrl {
    fn validate(&self) -> Result<()> {
        self.0.validate().map_err(|e| invalid(reason_of(&e)))?;

        match self.extension() {
            Some(ext) if Self::ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(invalid("file must use one of the allowed image extensions")),
        }
    }
}

impl TryFrom<String> for ProfilePictureUrl {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<ProfilePictureUrl> for String {
    fn from(url: ProfilePictureUrl) -> Self {
        url.0.into()
    }
}

impl fmt::Display for ProfilePictureUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
