// crates/shared-kernel/src/domain/repositories/outbox_store.rs

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::events::EventEnvelope;
use crate::errors::Result;

/// Côté lecture de l'outbox : utilisé par le relais.
#[async_trait]
pub trait OutboxStore: Send + Sync {
    /// Récupère les X prochains événements à traiter, dans l'ordre d'écriture
    async fn fetch_unprocessed(&self, limit: u32) -> Result<Vec<EventEnvelope>>;

    /// Marque les événements comme traités
    async fn mark_as_processed(&self, ids: &[Uuid]) -> Result<()>;

    /// En cas d'échec de publication, on incrémente 'attempts' et on garde l'erreur
    async fn mark_as_failed(&self, id: Uuid, last_error: String) -> Result<()>;
}
