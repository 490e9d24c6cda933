mod memory_session_repository;
mod memory_user_profile_repository;

pub use memory_session_repository::InMemorySessionRepository;
pub use memory_user_profile_repository::InMemoryUserProfileRepository;
