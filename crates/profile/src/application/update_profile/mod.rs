mod update_profile_command;
mod update_profile_dto;
mod update_profile_use_case;

pub use update_profile_command::UpdateProfileCommand;
pub use update_profile_dto::UpdateProfileDto;
pub use update_profile_use_case::UpdateProfileUseCase;

#[cfg(test)]
mod update_profile_use_case_test;
