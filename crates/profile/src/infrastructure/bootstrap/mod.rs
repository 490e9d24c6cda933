mod profile_service;
mod seed_data;

pub use profile_service::{ProfileService, ProfileServiceBuilder};
pub use seed_data::{SeedData, SeedUser};
