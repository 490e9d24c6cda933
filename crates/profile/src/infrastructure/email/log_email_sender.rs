// crates/profile/src/infrastructure/email/log_email_sender.rs

use async_trait::async_trait;
use shared_kernel::errors::AppResult;
use crate::application::notifications::{EmailMessage, EmailSender};

/// Transport de développement : l'email est écrit dans les logs.
#[derive(Debug, Clone)]
pub struct LogEmailSender {
    from: String,
}

impl LogEmailSender {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        tracing::info!(
            from = %self.from,
            to = %message.to.as_str(),
            kind = %message.kind,
            subject = %message.subject,
            changed_fields = ?message.changed_field_names(),
            "✉️ Email dispatched"
        );
        tracing::debug!(body = %message.body, "Email body");
        Ok(())
    }
}
