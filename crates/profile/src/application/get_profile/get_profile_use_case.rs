// crates/profile/src/application/get_profile/get_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::get_profile::GetProfileCommand;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;

/// Lecture d'un profil : tout appelant authentifié y a accès.
pub struct GetProfileUseCase {
    repo: Arc<dyn UserProfileRepository>,
}

impl GetProfileUseCase {
    pub fn new(repo: Arc<dyn UserProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, command: GetProfileCommand) -> Result<UserProfile> {
        tracing::debug!(actor = %command.actor.user_id, user_id = %command.user_id, "Fetching profile");

        self.repo.find_by_id(&command.user_id)
            .await?
            .ok_or_not_found(command.user_id)
    }
}
