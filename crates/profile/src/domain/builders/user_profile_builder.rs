// crates/profile/src/domain/builders/user_profile_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::events::AggregateMetadata;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::entities::UserProfile;
use crate::domain::value_objects::{
    Bio, Email, GithubUrl, LinkedinUrl, PersonName, ProfilePictureUrl,
};

/// Construction d'un `UserProfile`, en création (version 1) comme en restauration
/// depuis le stockage (`with_version`, `with_timestamps`).
pub struct UserProfileBuilder {
    id: UserId,
    email: Email,
    first_name: Option<PersonName>,
    last_name: Option<PersonName>,
    bio: Option<Bio>,
    github_profile_url: Option<GithubUrl>,
    linkedin_profile_url: Option<LinkedinUrl>,
    profile_picture_url: Option<ProfilePictureUrl>,
    is_professional: bool,
    professional_status_updated_at: Option<DateTime<Utc>>,
    version: i32,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl UserProfileBuilder {
    pub fn new(id: UserId, email: Email) -> Self {
        Self {
            id,
            email,
            first_name: None,
            last_name: None,
            bio: None,
            github_profile_url: None,
            linkedin_profile_url: None,
            profile_picture_url: None,
            is_professional: false,
            professional_status_updated_at: None,
            version: 1,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_first_name(mut self, name: PersonName) -> Self {
        self.first_name = Some(name);
        self
    }
    pub fn with_optional_first_name(mut self, name: Option<PersonName>) -> Self {
        self.first_name = name;
        self
    }
    pub fn with_last_name(mut self, name: PersonName) -> Self {
        self.last_name = Some(name);
        self
    }
    pub fn with_optional_last_name(mut self, name: Option<PersonName>) -> Self {
        self.last_name = name;
        self
    }
    pub fn with_bio(mut self, bio: Bio) -> Self {
        self.bio = Some(bio);
        self
    }
    pub fn with_optional_bio(mut self, bio: Option<Bio>) -> Self {
        self.bio = bio;
        self
    }
    pub fn with_optional_github_profile_url(mut self, url: Option<GithubUrl>) -> Self {
        self.github_profile_url = url;
        self
    }
    pub fn with_optional_linkedin_profile_url(mut self, url: Option<LinkedinUrl>) -> Self {
        self.linkedin_profile_url = url;
        self
    }
    pub fn with_optional_profile_picture_url(mut self, url: Option<ProfilePictureUrl>) -> Self {
        self.profile_picture_url = url;
        self
    }
    pub fn with_professional_status(mut self, is_professional: bool, updated_at: Option<DateTime<Utc>>) -> Self {
        self.is_professional = is_professional;
        self.professional_status_updated_at = updated_at;
        self
    }

    // --- RESTAURATION (Infrastructure) ---

    pub fn with_version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }

    pub fn build(self) -> UserProfile {
        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);

        UserProfile {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            email: self.email,
            github_profile_url: self.github_profile_url,
            linkedin_profile_url: self.linkedin_profile_url,
            profile_picture_url: self.profile_picture_url,
            is_professional: self.is_professional,
            professional_status_updated_at: self.professional_status_updated_at,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
            metadata: AggregateMetadata::restore(self.version),
        }
    }
}
