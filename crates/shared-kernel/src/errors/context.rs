// crates/shared-kernel/src/errors/context.rs
use serde::Serialize;

/// Violation d'une règle de validation sur un champ précis.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Nom du champ en erreur (ex: "email")
    pub field: String,
    /// Message d'erreur spécifique au champ
    pub message: String,
}

impl ErrorContext {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
