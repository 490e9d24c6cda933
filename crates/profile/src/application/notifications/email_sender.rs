// crates/profile/src/application/notifications/email_sender.rs

use async_trait::async_trait;
use shared_kernel::errors::AppResult;
use crate::application::notifications::EmailMessage;

/// Transport des emails (SMTP, API tierce, journal...)
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}
