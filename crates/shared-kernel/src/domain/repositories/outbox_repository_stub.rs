// crates/shared-kernel/src/domain/repositories/outbox_repository_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use crate::domain::events::{DomainEvent, EventEnvelope};
use crate::domain::repositories::OutboxRepository;
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};

/// Outbox en mémoire pour les tests de Use Case : on inspecte `saved_events`.
#[derive(Default)]
pub struct OutboxRepositoryStub {
    pub saved_events: Mutex<Vec<EventEnvelope>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl OutboxRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            error_to_return: Mutex::new(Some(error)),
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<EventEnvelope> {
        self.saved_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl OutboxRepository for OutboxRepositoryStub {
    async fn save(&self, event: &dyn DomainEvent, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.saved_events.lock().unwrap().push(EventEnvelope::wrap(event));
        Ok(())
    }
}
