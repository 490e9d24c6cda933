// crates/shared-kernel/src/domain/events/event.rs

use dyn_clone::DynClone;

use std::borrow::Cow;
use std::fmt::Debug;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

pub trait DomainEvent: DynClone + Debug + Send + Sync {
    /// Identifiant unique de l'événement (pour l'idempotence)
    fn event_id(&self) -> Uuid;

    /// Nom de l'événement (ex: "profile.updated")
    fn event_type(&self) -> Cow<'_, str>;

    /// Nom de l'agrégat (ex: "user_profile")
    fn aggregate_type(&self) -> Cow<'_, str>;

    /// ID de l'agrégat (ex: "0190a6f2-...")
    fn aggregate_id(&self) -> String;

    /// Horodatage (quand c'est arrivé)
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Données sérialisées, relisibles via `EventEnvelope::decode`
    fn payload(&self) -> Value;
}

dyn_clone::clone_trait_object!(DomainEvent);
