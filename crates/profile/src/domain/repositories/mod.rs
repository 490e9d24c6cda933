mod session_repository;
mod user_profile_repository;

#[cfg(test)]
mod user_profile_repository_stub;

pub use session_repository::SessionRepository;
pub use user_profile_repository::UserProfileRepository;

#[cfg(test)]
pub use user_profile_repository_stub::UserProfileRepositoryStub;
