mod update_professional_status_command;
mod update_professional_status_use_case;

pub use update_professional_status_command::{ProfessionalStatusQuery, UpdateProfessionalStatusCommand};
pub use update_professional_status_use_case::UpdateProfessionalStatusUseCase;
