// crates/shared-kernel/src/domain/events/envelope.rs

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use crate::domain::events::DomainEvent;

/// Forme figée d'un événement, telle qu'elle transite par l'outbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub id: Uuid,
    pub aggregate_type: String,
    pub aggregate_id: String,
    pub event_type: String,
    pub payload: Value,
    pub occurred_at: DateTime<Utc>,
}

impl EventEnvelope {
    /// L'identifiant de l'événement est conservé : c'est la clé d'idempotence côté consommateur.
    pub fn wrap(event: &dyn DomainEvent) -> Self {
        Self {
            id: event.event_id(),
            aggregate_type: event.aggregate_type().into_owned(),
            aggregate_id: event.aggregate_id(),
            event_type: event.event_type().into_owned(),
            payload: event.payload(),
            occurred_at: event.occurred_at(),
        }
    }

    /// Relit le payload sous sa forme typée.
    /// `None` si l'enveloppe vient d'un autre agrégat ou si son format ne correspond pas.
    pub fn decode<T: DeserializeOwned>(&self, aggregate_type: &str) -> Option<T> {
        if self.aggregate_type != aggregate_type {
            return None;
        }
        serde_json::from_value(self.payload.clone()).ok()
    }
}
