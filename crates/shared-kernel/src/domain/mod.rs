pub mod entities;
pub mod events;
mod identifier;
pub mod repositories;
pub mod transaction;
pub mod value_objects;

pub use identifier::Identifier;
