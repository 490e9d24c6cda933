// crates/profile/src/application/notifications/email_message.rs

use std::fmt;
use serde::Serialize;
use crate::domain::value_objects::{Email, ProfileField};

/// Type de notification envoyée à l'utilisateur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ProfileUpdated,
    ProfessionalStatusUpgraded,
    ProfessionalStatusRevoked,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileUpdated => "profile_updated",
            Self::ProfessionalStatusUpgraded => "professional_status_upgraded",
            Self::ProfessionalStatusRevoked => "professional_status_revoked",
        }
    }

    /// Noms des gabarits minijinja (sujet, corps)
    pub(crate) fn template_names(&self) -> (&'static str, &'static str) {
        match self {
            Self::ProfileUpdated => ("profile_updated.subject", "profile_updated.body"),
            Self::ProfessionalStatusUpgraded => ("professional_status_upgraded.subject", "professional_status_upgraded.body"),
            Self::ProfessionalStatusRevoked => ("professional_status_revoked.subject", "professional_status_revoked.body"),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email prêt à partir : destinataire, gabarit et contenu rendu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    pub to: Email,
    pub kind: NotificationKind,
    pub subject: String,
    pub body: String,
    /// Champs modifiés (vide pour un changement de statut)
    pub changed_fields: Vec<ProfileField>,
}

impl EmailMessage {
    /// Noms des champs modifiés, tels qu'exposés dans l'API
    pub fn changed_field_names(&self) -> Vec<&'static str> {
        self.changed_fields.iter().map(ProfileField::as_str).collect()
    }
}
