mod actor;
mod session;
mod user_profile;

#[cfg(test)]
mod tests;

pub use actor::Actor;
pub use session::Session;
pub use user_profile::UserProfile;
