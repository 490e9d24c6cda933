// crates/profile/src/domain/events/profile_events.rs

use std::borrow::Cow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;
use shared_kernel::domain::events::DomainEvent;
use shared_kernel::domain::value_objects::UserId;
use crate::domain::value_objects::{Email, ProfileField};

/// Faits métier émis par l'agrégat `UserProfile`.
/// Le destinataire (email, prénom) est figé dans l'événement au moment du fait.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum ProfileEvent {
    /// Une mise à jour partielle a modifié au moins un champ
    ProfileUpdated {
        id: Uuid,
        user_id: UserId,
        email: Email,
        /// Adresse remplacée, présente seulement si le patch a changé l'email
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous_email: Option<Email>,
        first_name: Option<String>,
        changed_fields: Vec<ProfileField>,
        changed_by: UserId,
        occurred_at: DateTime<Utc>,
    },

    /// Promotion ou révocation du statut professionnel
    ProfessionalStatusChanged {
        id: Uuid,
        user_id: UserId,
        email: Email,
        first_name: Option<String>,
        is_professional: bool,
        changed_by: UserId,
        occurred_at: DateTime<Utc>,
    },
}

impl ProfileEvent {
    pub const PROFILE_UPDATED: &'static str = "profile.updated";
    pub const PROFESSIONAL_STATUS_CHANGED: &'static str = "profile.professional_status.changed";
    pub const AGGREGATE_TYPE: &'static str = "user_profile";
}

impl DomainEvent for ProfileEvent {
    fn event_id(&self) -> Uuid {
        match self {
            Self::ProfileUpdated { id, .. } |
            Self::ProfessionalStatusChanged { id, .. } => *id,
        }
    }

    fn event_type(&self) -> Cow<'_, str> {
        match self {
            Self::ProfileUpdated { .. } => Cow::Borrowed(Self::PROFILE_UPDATED),
            Self::ProfessionalStatusChanged { .. } => Cow::Borrowed(Self::PROFESSIONAL_STATUS_CHANGED),
        }
    }

    fn aggregate_type(&self) -> Cow<'_, str> {
        Cow::Borrowed(Self::AGGREGATE_TYPE)
    }

    fn aggregate_id(&self) -> String {
        match self {
            Self::ProfileUpdated { user_id, .. } |
            Self::ProfessionalStatusChanged { user_id, .. } => user_id.to_string(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::ProfileUpdated { occurred_at, .. } |
            Self::ProfessionalStatusChanged { occurred_at, .. } => *occurred_at,
        }
    }

    fn payload(&self) -> Value {
        json!(self)
    }
}
