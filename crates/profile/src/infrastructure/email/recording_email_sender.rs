// crates/profile/src/infrastructure/email/recording_email_sender.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use async_trait::async_trait;
use shared_kernel::errors::AppResult;
use crate::application::notifications::{EmailMessage, EmailSender};
use crate::domain::value_objects::Email;

/// Conserve les emails envoyés pour inspection. Les clones partagent la même boîte.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmailSender {
    outbox: Arc<Mutex<Vec<EmailMessage>>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    fn outbox(&self) -> MutexGuard<'_, Vec<EmailMessage>> {
        self.outbox.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn messages(&self) -> Vec<EmailMessage> {
        self.outbox().clone()
    }

    pub fn messages_to(&self, to: &Email) -> Vec<EmailMessage> {
        self.outbox().iter().filter(|m| &m.to == to).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.outbox().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outbox().is_empty()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        self.outbox().push(message.clone());
        Ok(())
    }
}
