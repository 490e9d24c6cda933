// crates/profile/src/domain/value_objects/profile_field.rs

use std::fmt;
use serde::{Deserialize, Serialize};

/// Champs modifiables d'un profil. Le nom snake_case est celui de l'API
/// et celui repris dans les notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Bio,
    Email,
    GithubProfileUrl,
    LinkedinProfileUrl,
    ProfilePictureUrl,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Bio,
        Self::Email,
        Self::GithubProfileUrl,
        Self::LinkedinProfileUrl,
        Self::ProfilePictureUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Bio => "bio",
            Self::Email => "email",
            Self::GithubProfileUrl => "github_profile_url",
            Self::LinkedinProfileUrl => "linkedin_profile_url",
            Self::ProfilePictureUrl => "profile_picture_url",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
