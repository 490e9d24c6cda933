pub mod ports;
pub mod workers;

mod dto;

pub use dto::{FromDto, ToDto};
