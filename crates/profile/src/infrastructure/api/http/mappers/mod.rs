mod error_mapper;
mod profile_http_mapper;

pub use error_mapper::HttpError;
pub use profile_http_mapper::{ProfessionalStatusResponse, ProfileResponse};
