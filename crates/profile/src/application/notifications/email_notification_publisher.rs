// crates/profile/src/application/notifications/email_notification_publisher.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::application::ports::MessageProducer;
use shared_kernel::domain::events::EventEnvelope;
use shared_kernel::errors::AppResult;

use crate::application::notifications::{EmailSender, NotificationKind, NotificationRenderer};
use crate::domain::events::ProfileEvent;

/// Destination de l'outbox du contexte Profil : chaque événement de profil
/// devient un email pour l'utilisateur concerné. Un changement d'adresse
/// prévient aussi l'ancienne adresse.
pub struct EmailNotificationPublisher {
    renderer: NotificationRenderer,
    sender: Arc<dyn EmailSender>,
}

impl EmailNotificationPublisher {
    pub fn new(renderer: NotificationRenderer, sender: Arc<dyn EmailSender>) -> Self {
        Self { renderer, sender }
    }
}

#[async_trait]
impl MessageProducer for EmailNotificationPublisher {
    async fn publish(&self, envelope: &EventEnvelope) -> AppResult<()> {
        // 1. Décodage : les événements étrangers au profil ne déclenchent rien
        let Some(event) = envelope.decode::<ProfileEvent>(ProfileEvent::AGGREGATE_TYPE) else {
            tracing::debug!(event_type = %envelope.event_type, "No notification for event");
            return Ok(());
        };

        // 2. Choix du gabarit et des destinataires
        let mut messages = Vec::with_capacity(2);
        match event {
            ProfileEvent::ProfileUpdated { email, previous_email, first_name, changed_fields, .. } => {
                if let Some(previous) = previous_email.filter(|p| *p != email) {
                    messages.push(self.renderer.render(
                        NotificationKind::ProfileUpdated,
                        previous,
                        first_name.as_deref(),
                        changed_fields.clone(),
                    )?);
                }
                messages.push(self.renderer.render(
                    NotificationKind::ProfileUpdated,
                    email,
                    first_name.as_deref(),
                    changed_fields,
                )?);
            }
            ProfileEvent::ProfessionalStatusChanged { email, first_name, is_professional, .. } => {
                let kind = if is_professional {
                    NotificationKind::ProfessionalStatusUpgraded
                } else {
                    NotificationKind::ProfessionalStatusRevoked
                };
                messages.push(self.renderer.render(kind, email, first_name.as_deref(), Vec::new())?);
            }
        }

        // 3. Envoi
        for message in &messages {
            self.sender.send(message).await?;

            tracing::info!(
                event_id = %envelope.id,
                kind = %message.kind,
                to = %message.to.as_str(),
                "📧 Notification sent"
            );
        }

        Ok(())
    }
}
