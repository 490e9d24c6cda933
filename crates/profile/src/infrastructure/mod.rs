pub mod api;
pub mod bootstrap;
pub mod email;
pub mod memory;
