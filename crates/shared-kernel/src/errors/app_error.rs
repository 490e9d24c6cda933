use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InfrastructureFailure, message)
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Validation (422) : le message nomme le champ ET la raison
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}: {reason}"),
                details: Some(serde_json::json!([{ "field": field, "message": reason }])),
            },

            DomainError::InvalidFields(errors) => {
                let summary = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join("; ");

                Self {
                    code: ErrorCode::ValidationFailed,
                    message: format!("Validation failed: {summary}"),
                    details: serde_json::to_value(&errors).ok(),
                }
            }

            // 3. Concurrence (409)
            DomainError::ConcurrencyConflict { reason } => Self::new(ErrorCode::ConcurrencyConflict, reason),
            DomainError::TooManyConflicts(reason) => Self::new(ErrorCode::ConcurrencyConflict, reason),

            // 4. Identité non valide (401)
            DomainError::Unauthorized { reason } => Self::new(ErrorCode::Unauthorized, reason),

            // 5. Droits insuffisants (403)
            DomainError::Forbidden { reason } => Self::new(ErrorCode::Forbidden, reason),

            // 6. Erreurs techniques (500) : on masque le détail au client
            DomainError::Infrastructure(msg) | DomainError::Internal(msg) => {
                tracing::error!("Internal failure hidden from client: {}", msg);
                Self::new(
                    ErrorCode::InternalError,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field_and_reason() {
        let err: AppError = DomainError::Validation {
            field: "github_profile_url",
            reason: "Invalid GitHub URL: host must be github.com".into(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("GitHub URL"));
        assert!(err.details.is_some());
    }

    #[test]
    fn test_internal_errors_are_masked() {
        let err: AppError = DomainError::Internal("lock poisoned".into()).into();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert!(!err.message.contains("poisoned"));
    }
}
