mod health_handler;
mod profile_handler;

pub use health_handler::health;
pub use profile_handler::{get_profile, update_professional_status, update_profile};
