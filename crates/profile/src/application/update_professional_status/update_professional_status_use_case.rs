// crates/profile/src/application/update_professional_status/update_professional_status_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::events::AggregateRoot;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::{with_retry, RetryConfig, TransactionManagerExt};

use crate::application::update_professional_status::UpdateProfessionalStatusCommand;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;

pub struct UpdateProfessionalStatusUseCase {
    repo: Arc<dyn UserProfileRepository>,
    outbox_repo: Arc<dyn OutboxRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl UpdateProfessionalStatusUseCase {
    pub fn new(
        repo: Arc<dyn UserProfileRepository>,
        outbox_repo: Arc<dyn OutboxRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, outbox_repo, tx_manager }
    }

    pub async fn execute(&self, command: UpdateProfessionalStatusCommand) -> Result<UserProfile> {
        // Seuls les managers et admins, avant tout accès au stockage
        command.actor.ensure_can_change_professional_status()?;

        with_retry(RetryConfig::default(), || async {
            self.try_execute_once(&command).await
        }).await
    }

    async fn try_execute_once(&self, cmd: &UpdateProfessionalStatusCommand) -> Result<UserProfile> {
        // 1. Récupération
        let mut profile = self.repo.find_by_id(&cmd.user_id)
            .await?
            .ok_or_not_found(cmd.user_id)?;

        let expected_version = profile.version();

        // 2. Mutation
        if !profile.set_professional_status(&cmd.actor, cmd.status)? {
            tracing::debug!(user_id = %cmd.user_id, status = cmd.status, "Professional status unchanged");
            return Ok(profile);
        }

        // 3. Persistence Transactionnelle
        let events = profile.pull_events();
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
            is_professional = cmd.status,
            "🎖️ Professional status changed"
        );

        Ok(profile)
    }
}
