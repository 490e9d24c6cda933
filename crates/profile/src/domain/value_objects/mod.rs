mod bio;
mod email;
mod github_url;
mod linkedin_url;
mod markup;
mod person_name;
mod profile_field;
mod profile_picture_url;
mod user_role;

#[cfg(test)]
mod tests;

pub use bio::Bio;
pub use email::Email;
pub use github_url::GithubUrl;
pub use linkedin_url::LinkedinUrl;
pub use person_name::PersonName;
pub use profile_field::ProfileField;
pub use profile_picture_url::ProfilePictureUrl;
pub use user_role::UserRole;

use shared_kernel::errors::DomainError;

/// Raison portée par une erreur de validation (sans le nom du champ)
pub(crate) fn reason_of(err: &DomainError) -> String {
    match err {
        DomainError::Validation { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}
