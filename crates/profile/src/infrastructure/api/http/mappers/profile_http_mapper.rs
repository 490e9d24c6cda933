// crates/profile/src/infrastructure/api/http/mappers/profile_http_mapper.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::application::ToDto;
use shared_kernel::domain::events::AggregateRoot;
use shared_kernel::domain::value_objects::UserId;
use crate::domain::entities::UserProfile;

/// Représentation JSON d'un profil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub email: String,
    pub github_profile_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub profile_picture_url: Option<String>,
    pub is_professional: bool,
    pub professional_status_updated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl ToDto<ProfileResponse> for UserProfile {
    fn to_dto(&self) -> ProfileResponse {
        ProfileResponse {
            id: *self.id(),
            first_name: self.first_name().map(|v| v.as_str().to_owned()),
            last_name: self.last_name().map(|v| v.as_str().to_owned()),
            bio: self.bio().map(|v| v.as_str().to_owned()),
            email: self.email().as_str().to_owned(),
            github_profile_url: self.github_profile_url().map(|v| v.as_str().to_owned()),
            linkedin_profile_url: self.linkedin_profile_url().map(|v| v.as_str().to_owned()),
            profile_picture_url: self.profile_picture_url().map(|v| v.as_str().to_owned()),
            is_professional: self.is_professional(),
            professional_status_updated_at: self.professional_status_updated_at(),
            created_at: self.created_at(),
            updated_at: self.updated_at(),
            version: self.version(),
        }
    }
}

/// Réponse de `PUT /users/{id}/professional-status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalStatusResponse {
    pub id: UserId,
    pub email: String,
    pub is_professional: bool,
    pub professional_status_updated_at: Option<DateTime<Utc>>,
}

impl ToDto<ProfessionalStatusResponse> for UserProfile {
    fn to_dto(&self) -> ProfessionalStatusResponse {
        ProfessionalStatusResponse {
            id: *self.id(),
            email: self.email().as_str().to_owned(),
            is_professional: self.is_professional(),
            professional_status_updated_at: self.professional_status_updated_at(),
        }
    }
}
