// crates/shared-kernel/src/domain/repositories/outbox_repository.rs

use crate::domain::events::DomainEvent;
use crate::domain::transaction::Transaction;
use crate::errors::Result;
use async_trait::async_trait;

/// Côté écriture de l'outbox : utilisé par les Use Cases.
#[async_trait]
pub trait OutboxRepository: Send + Sync {
    /// Enregistre un événement dans l'outbox, au sein de la transaction fournie si présente.
    async fn save(&self, event: &dyn DomainEvent, tx: Option<&mut dyn Transaction>) -> Result<()>;
}
