// crates/shared-kernel/src/application/ports/message_producer.rs

use crate::domain::events::EventEnvelope;
use crate::errors::AppResult;
use async_trait::async_trait;

/// Destination des événements relayés depuis l'outbox (bus, mail, ...).
#[async_trait]
pub trait MessageProducer: Send + Sync {
    /// Publie une enveloppe. Le producteur s'appuie sur `event_type` pour le routage.
    async fn publish(&self, event: &EventEnvelope) -> AppResult<()>;

    /// Publie un lot d'enveloppes, en s'arrêtant à la première erreur.
    async fn publish_batch(&self, events: &[EventEnvelope]) -> AppResult<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
