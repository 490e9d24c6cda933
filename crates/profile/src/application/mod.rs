pub mod get_profile;
pub mod notifications;
pub mod update_professional_status;
pub mod update_profile;
