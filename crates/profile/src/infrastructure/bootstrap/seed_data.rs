// crates/profile/src/infrastructure/bootstrap/seed_data.rs

use std::path::Path;
use serde::Deserialize;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};

use crate::domain::entities::{Session, UserProfile};
use crate::domain::repositories::{SessionRepository, UserProfileRepository};
use crate::domain::value_objects::{
    Bio, Email, GithubUrl, LinkedinUrl, PersonName, ProfilePictureUrl, UserRole,
};
use crate::infrastructure::memory::InMemorySessionRepository;

/// Jeu de données initial : profils et jetons d'accès.
///
/// ```json
/// { "users": [ { "email": "ada@example.com", "role": "admin", "token": "admin-token" } ] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedUser {
    #[serde(default)]
    pub id: Option<UserId>,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub github_profile_url: Option<String>,
    #[serde(default)]
    pub linkedin_profile_url: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub is_professional: bool,
    #[serde(default)]
    pub role: UserRole,
    /// Jeton imposé ; un jeton aléatoire est émis s'il est absent
    #[serde(default)]
    pub token: Option<String>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::new(ErrorCode::ValidationFailed, format!("Invalid seed data: {e}")))
    }

    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::infrastructure(format!("Cannot read seed file {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Insère les profils et enregistre les sessions. Renvoie les sessions créées.
    /// Chaque valeur passe par son Value Object : un seed invalide est refusé.
    pub async fn load_into(
        &self,
        profiles: &dyn UserProfileRepository,
        sessions: &InMemorySessionRepository,
    ) -> AppResult<Vec<Session>> {
        let mut issued = Vec::with_capacity(self.users.len());

        for user in &self.users {
            let profile = user.to_profile()?;
            let user_id = *profile.id();
            profiles.insert(&profile).await?;

            let session = match &user.token {
                Some(token) => {
                    let session = Session::new(token.clone(), user_id, user.role);
                    sessions.insert(session.clone());
                    session
                }
                None => sessions.issue(user_id, user.role).await?,
            };

            tracing::info!(
                user_id = %user_id,
                email = %profile.email().as_str(),
                role = user.role.as_str(),
                "🌱 Seeded user"
            );
            issued.push(session);
        }

        Ok(issued)
    }
}

impl SeedUser {
    fn to_profile(&self) -> AppResult<UserProfile> {
        let id = self.id.unwrap_or_default();

        let first_name = self.first_name.as_deref()
            .map(|v| PersonName::try_new_for_field("first_name", v))
            .transpose()?;
        let last_name = self.last_name.as_deref()
            .map(|v| PersonName::try_new_for_field("last_name", v))
            .transpose()?;

        let profile = UserProfile::builder(id, Email::try_new(self.email.as_str())?)
            .with_optional_first_name(first_name)
            .with_optional_last_name(last_name)
            .with_optional_bio(self.bio.as_deref().map(Bio::try_new).transpose()?)
            .with_optional_github_profile_url(self.github_profile_url.as_deref().map(GithubUrl::try_new).transpose()?)
            .with_optional_linkedin_profile_url(self.linkedin_profile_url.as_deref().map(LinkedinUrl::try_new).transpose()?)
            .with_optional_profile_picture_url(self.profile_picture_url.as_deref().map(ProfilePictureUrl::try_new).transpose()?)
            .with_professional_status(self.is_professional, None)
            .build();

        Ok(profile)
    }
}
