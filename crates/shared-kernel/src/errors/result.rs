use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Agrégats, Value Objects, Use Cases, Repositories (Ports).
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Workers (Outbox), API (Handlers), binaire.
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Helper pour les erreurs de type "Internal" rapides
pub fn internal_err(msg: impl Into<String>) -> DomainError {
    DomainError::Internal(msg.into())
}
