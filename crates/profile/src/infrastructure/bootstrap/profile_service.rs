// crates/profile/src/infrastructure/bootstrap/profile_service.rs

use std::sync::Arc;
use axum::Router;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use shared_kernel::application::workers::OutboxProcessor;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::bootstrap::{spawn_outbox_relay, OutboxRelayConfig};
use shared_kernel::infrastructure::memory::{MemoryOutboxRepository, MemoryTransactionManager};

use crate::application::get_profile::GetProfileUseCase;
use crate::application::notifications::{EmailNotificationPublisher, EmailSender, NotificationRenderer};
use crate::application::update_professional_status::UpdateProfessionalStatusUseCase;
use crate::application::update_profile::UpdateProfileUseCase;
use crate::domain::entities::Session;
use crate::infrastructure::api::http::{router, ApiState};
use crate::infrastructure::bootstrap::SeedData;
use crate::infrastructure::email::LogEmailSender;
use crate::infrastructure::memory::{InMemorySessionRepository, InMemoryUserProfileRepository};

/// Assemblage du contexte Profil : stockage, use cases, API et relais de notifications.
pub struct ProfileService {
    profiles: InMemoryUserProfileRepository,
    sessions: InMemorySessionRepository,
    outbox: MemoryOutboxRepository,
    email_sender: Arc<dyn EmailSender>,
    state: ApiState,
    seeded: Vec<Session>,
}

impl ProfileService {
    pub fn builder() -> ProfileServiceBuilder {
        ProfileServiceBuilder::default()
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    pub fn profiles(&self) -> &InMemoryUserProfileRepository {
        &self.profiles
    }

    pub fn sessions(&self) -> &InMemorySessionRepository {
        &self.sessions
    }

    pub fn outbox(&self) -> &MemoryOutboxRepository {
        &self.outbox
    }

    /// Sessions créées au chargement du seed
    pub fn seeded_sessions(&self) -> &[Session] {
        &self.seeded
    }

    fn publisher(&self) -> AppResult<EmailNotificationPublisher> {
        Ok(EmailNotificationPublisher::new(
            NotificationRenderer::new()?,
            self.email_sender.clone(),
        ))
    }

    /// Démarre le relais outbox -> email en tâche de fond
    pub fn spawn_notification_relay(
        &self,
        config: OutboxRelayConfig,
        shutdown_rx: watch::Receiver<bool>,
    ) -> AppResult<JoinHandle<()>> {
        Ok(spawn_outbox_relay(
            "Profile",
            self.outbox.clone(),
            self.publisher()?,
            config,
            shutdown_rx,
        ))
    }

    /// Vide l'outbox de manière synchrone. Renvoie le nombre de notifications envoyées.
    pub async fn drain_notifications(&self) -> AppResult<usize> {
        let processor = OutboxProcessor::new(
            self.outbox.clone(),
            self.publisher()?,
            OutboxRelayConfig::default().batch_size,
            OutboxRelayConfig::default().polling_interval,
        );

        let mut total = 0;
        loop {
            let delivered = processor.process_batch().await?;
            if delivered == 0 {
                break;
            }
            total += delivered;
        }
        Ok(total)
    }
}

#[derive(Default)]
pub struct ProfileServiceBuilder {
    email_sender: Option<Arc<dyn EmailSender>>,
    mail_from: Option<String>,
    max_attempts: Option<u32>,
    seed: Option<SeedData>,
}

impl ProfileServiceBuilder {
    /// Transport des emails (par défaut : journalisation)
    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    pub fn with_mail_from(mut self, from: impl Into<String>) -> Self {
        self.mail_from = Some(from.into());
        self
    }

    /// Nombre d'échecs de publication avant abandon d'une notification
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_seed(mut self, seed: SeedData) -> Self {
        self.seed = Some(seed);
        self
    }

    pub async fn build(self) -> AppResult<ProfileService> {
        // 1. Stockage et outils transactionnels
        let profiles = InMemoryUserProfileRepository::new();
        let sessions = InMemorySessionRepository::new();
        let outbox = MemoryOutboxRepository::new(
            self.max_attempts.unwrap_or(MemoryOutboxRepository::DEFAULT_MAX_ATTEMPTS),
        );
        let tx_manager = Arc::new(MemoryTransactionManager::new());

        // 2. Données initiales
        let seeded = match &self.seed {
            Some(seed) => seed.load_into(&profiles, &sessions).await?,
            None => Vec::new(),
        };

        // 3. Use cases
        let repo = Arc::new(profiles.clone());
        let outbox_repo = Arc::new(outbox.clone());

        let state = ApiState {
            sessions: Arc::new(sessions.clone()),
            get_profile: Arc::new(GetProfileUseCase::new(repo.clone())),
            update_profile: Arc::new(UpdateProfileUseCase::new(
                repo.clone(),
                outbox_repo.clone(),
                tx_manager.clone(),
            )),
            update_professional_status: Arc::new(UpdateProfessionalStatusUseCase::new(
                repo,
                outbox_repo,
                tx_manager,
            )),
        };

        // 4. Transport des notifications
        let email_sender = self.email_sender.unwrap_or_else(|| {
            let from = self.mail_from.unwrap_or_else(|| "no-reply@profiles.local".to_string());
            let sender: Arc<dyn EmailSender> = Arc::new(LogEmailSender::new(from));
            sender
        });

        tracing::info!(seeded_users = seeded.len(), "✅ Profile service assembled");

        Ok(ProfileService { profiles, sessions, outbox, email_sender, state, seeded })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::email::RecordingEmailSender;

    #[tokio::test]
    async fn test_build_with_seed_and_drain() {
        let seed = SeedData::from_json(r#"{ "users": [ { "email": "ivy@example.com", "token": "t" } ] }"#).unwrap();
        let emails = RecordingEmailSender::new();

        let service = ProfileService::builder()
            .with_email_sender(Arc::new(emails.clone()))
            .with_seed(seed)
            .build()
            .await
            .unwrap();

        assert_eq!(service.seeded_sessions().len(), 1);
        assert_eq!(service.profiles().len(), 1);
        assert_eq!(service.drain_notifications().await.unwrap(), 0);
        assert!(emails.is_empty());
    }
}
