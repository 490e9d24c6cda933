// crates/shared-kernel/src/errors/error.rs

use crate::errors::ErrorContext;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Plusieurs champs invalides dans la même requête
    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(Vec<ErrorContext>),

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// Erreur de concurrence (Optimistic Locking / Version Mismatch)
    #[error("Concurrency conflict: {reason}")]
    ConcurrencyConflict {
        reason: String,
    },

    /// Échec définitif après plusieurs tentatives de retry
    #[error("Operation failed after maximum retries: {0}")]
    TooManyConflicts(String),

    /// Identité absente ou non reconnue
    #[error("Unauthorized access: {reason}")]
    Unauthorized {
        reason: String,
    },

    /// Accès interdit malgré une identité valide (RBAC)
    #[error("Forbidden: {reason}")]
    Forbidden {
        reason: String,
    },

    /// Erreur liée à l'infrastructure (stockage, transport mail)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Utilisé par la boucle de Retry du Use Case
    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(self, Self::ConcurrencyConflict { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidFields(_))
    }

    /// Regroupe une liste de violations : une seule reste une `Validation` simple.
    pub fn from_violations(mut violations: Vec<(&'static str, String)>) -> Option<Self> {
        match violations.len() {
            0 => None,
            1 => violations
                .pop()
                .map(|(field, reason)| Self::Validation { field, reason }),
            _ => Some(Self::InvalidFields(
                violations
                    .into_iter()
                    .map(|(field, reason)| ErrorContext::new(field, reason))
                    .collect(),
            )),
        }
    }

    /// Liste à plat des violations portées par l'erreur (vide si ce n'est pas une erreur de validation)
    pub fn violations(&self) -> Vec<ErrorContext> {
        match self {
            Self::Validation { field, reason } => vec![ErrorContext::new(*field, reason.clone())],
            Self::InvalidFields(errors) => errors.clone(),
            _ => Vec::new(),
        }
    }
}
