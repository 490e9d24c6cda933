// crates/profile/src/application/update_profile/update_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::events::AggregateRoot;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::{with_retry, RetryConfig, TransactionManagerExt};

use crate::application::update_profile::UpdateProfileCommand;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;

pub struct UpdateProfileUseCase {
    repo: Arc<dyn UserProfileRepository>,
    outbox_repo: Arc<dyn OutboxRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl UpdateProfileUseCase {
    pub fn new(
        repo: Arc<dyn UserProfileRepository>,
        outbox_repo: Arc<dyn OutboxRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, outbox_repo, tx_manager }
    }

    pub async fn execute(&self, command: UpdateProfileCommand) -> Result<UserProfile> {
        // 1. Contrôles sans I/O : droits puis contenu
        command.actor.ensure_can_edit_profile_of(&command.user_id)?;

        if command.patch.is_empty() {
            return Err(DomainError::Validation {
                field: "body",
                reason: "At least one profile field must be provided".into(),
            });
        }

        with_retry(RetryConfig::default(), || async {
            self.try_execute_once(&command).await
        }).await
    }

    async fn try_execute_once(&self, cmd: &UpdateProfileCommand) -> Result<UserProfile> {
        // 2. Récupération du profil
        let mut profile = self.repo.find_by_id(&cmd.user_id)
            .await?
            .ok_or_not_found(cmd.user_id)?;

        let expected_version = profile.version();

        // 3. Application du changement (Modèle Riche)
        let changed = profile.apply_patch(&cmd.actor, cmd.patch.clone())?;

        // 4. Extraction des événements
        let events = profile.pull_events();

        // Idempotence Applicative : valeurs identiques, pas d'I/O ni de notification
        if events.is_empty() {
            tracing::debug!(user_id = %cmd.user_id, "Profile update is a no-op");
            return Ok(profile);
        }

        // 5. Persistence Transactionnelle (profil + outbox)
        let repo = self.repo.clone();
        let outbox = self.outbox_repo.clone();
        let snapshot = profile.clone();

        self.tx_manager.run_in_transaction(move |mut tx| async move {
            repo.save(&snapshot, expected_version, Some(&mut *tx)).await?;
            for event in events {
                outbox.save(event.as_ref(), Some(&mut *tx)).await?;
            }
            tx.commit().await
        }).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            actor = %cmd.actor.user_id,
            changed_fields = ?changed,
            version = profile.version(),
            "✅ Profile updated"
        );

        Ok(profile)
    }
}
