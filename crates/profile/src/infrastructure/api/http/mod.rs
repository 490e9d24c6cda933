// crates/profile/src/infrastructure/api/http/mod.rs
pub mod handlers;
pub mod mappers;
pub mod middleware;
mod router;
mod state;

pub use router::router;
pub use state::ApiState;
