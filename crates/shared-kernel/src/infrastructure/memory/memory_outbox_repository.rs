// crates/shared-kernel/src/infrastructure/memory/memory_outbox_repository.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::events::{DomainEvent, EventEnvelope};
use crate::domain::repositories::{OutboxRepository, OutboxStore};
use crate::domain::transaction::Transaction;
use crate::errors::Result;
use crate::infrastructure::memory::TransactionExt;

#[derive(Debug, Clone)]
struct OutboxRow {
    envelope: EventEnvelope,
    attempts: u32,
    last_error: Option<String>,
}

/// Événement abandonné après `max_attempts` échecs de publication
#[derive(Debug, Clone)]
pub struct DeadLetter {
    pub envelope: EventEnvelope,
    pub attempts: u32,
    pub last_error: Option<String>,
}

/// Outbox en mémoire : écriture transactionnelle côté Use Case,
/// lecture/acquittement côté relais. Les clones partagent le même stockage.
#[derive(Clone)]
pub struct MemoryOutboxRepository {
    rows: Arc<Mutex<Vec<OutboxRow>>>,
    max_attempts: u32,
}

impl MemoryOutboxRepository {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    pub fn new(max_attempts: u32) -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            max_attempts: max_attempts.max(1),
        }
    }

    fn rows(&self) -> MutexGuard<'_, Vec<OutboxRow>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Événements encore éligibles à la publication
    pub fn pending(&self) -> Vec<EventEnvelope> {
        let max = self.max_attempts;
        self.rows()
            .iter()
            .filter(|r| r.attempts < max)
            .map(|r| r.envelope.clone())
            .collect()
    }

    pub fn dead_letters(&self) -> Vec<DeadLetter> {
        let max = self.max_attempts;
        self.rows()
            .iter()
            .filter(|r| r.attempts >= max)
            .map(|r| DeadLetter {
                envelope: r.envelope.clone(),
                attempts: r.attempts,
                last_error: r.last_error.clone(),
            })
            .collect()
    }
}

impl Default for MemoryOutboxRepository {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

#[async_trait]
impl OutboxRepository for MemoryOutboxRepository {
    async fn save(&self, event: &dyn DomainEvent, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let row = OutboxRow {
            envelope: EventEnvelope::wrap(event),
            attempts: 0,
            last_error: None,
        };

        match tx {
            Some(tx) => {
                let rows = self.rows.clone();
                tx.downcast_mut_memory()?.stage(move || {
                    rows.lock().unwrap_or_else(PoisonError::into_inner).push(row);
                });
            }
            None => self.rows().push(row),
        }

        Ok(())
    }
}

#[async_trait]
impl OutboxStore for MemoryOutboxRepository {
    async fn fetch_unprocessed(&self, limit: u32) -> Result<Vec<EventEnvelope>> {
        let max = self.max_attempts;
        Ok(self
            .rows()
            .iter()
            .filter(|r| r.attempts < max)
            .take(limit as usize)
            .map(|r| r.envelope.clone())
            .collect())
    }

    async fn mark_as_processed(&self, ids: &[Uuid]) -> Result<()> {
        self.rows().retain(|r| !ids.contains(&r.envelope.id));
        Ok(())
    }

    async fn mark_as_failed(&self, id: Uuid, last_error: String) -> Result<()> {
        let max = self.max_attempts;
        if let Some(row) = self.rows().iter_mut().find(|r| r.envelope.id == id) {
            row.attempts += 1;
            row.last_error = Some(last_error);
            if row.attempts >= max {
                tracing::error!(
                    event_id = %id,
                    event_type = %row.envelope.event_type,
                    attempts = row.attempts,
                    "☠️ Event moved to dead letters"
                );
            }
        }
        Ok(())
    }
}
