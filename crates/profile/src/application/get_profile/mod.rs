mod get_profile_command;
mod get_profile_use_case;

pub use get_profile_command::GetProfileCommand;
pub use get_profile_use_case::GetProfileUseCase;
