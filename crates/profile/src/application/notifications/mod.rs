mod email_message;
mod email_notification_publisher;
mod email_sender;
mod notification_renderer;

pub use email_message::{EmailMessage, NotificationKind};
pub use email_notification_publisher::EmailNotificationPublisher;
pub use email_sender::EmailSender;
pub use notification_renderer::NotificationRenderer;
