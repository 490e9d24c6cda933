mod log_email_sender;
mod recording_email_sender;

pub use log_email_sender::LogEmailSender;
pub use recording_email_sender::RecordingEmailSender;
