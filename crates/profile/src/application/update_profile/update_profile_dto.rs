// crates/profile/src/application/update_profile/update_profile_dto.rs

use serde::{Deserialize, Deserializer};
use shared_kernel::application::FromDto;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::params::ProfilePatch;
use crate::domain::value_objects::{
    Bio, Email, GithubUrl, LinkedinUrl, PersonName, ProfilePictureUrl,
};

/// Corps JSON de `PUT /users/{id}/profile`.
/// Un champ absent n'est pas modifié, `null` efface la valeur. Les champs inconnus
/// (ex: `is_professional`, `role`) sont refusés.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileDto {
    #[serde(default, deserialize_with = "double_option")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub github_profile_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linkedin_profile_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub profile_picture_url: Option<Option<String>>,
}

// Distingue un champ absent (None) d'un champ explicitement à null (Some(None))
fn double_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateProfileDto {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.bio.is_none()
            && self.email.is_none()
            && self.github_profile_url.is_none()
            && self.linkedin_profile_url.is_none()
            && self.profile_picture_url.is_none()
    }
}

/// Validation de tous les champs : toutes les violations sont remontées d'un coup.
impl FromDto<UpdateProfileDto> for ProfilePatch {
    fn from_dto(dto: UpdateProfileDto) -> Result<Self> {
        if dto.is_empty() {
            return Err(DomainError::Validation {
                field: "body",
                reason: "At least one profile field must be provided".into(),
            });
        }

        let mut violations: Vec<(&'static str, String)> = Vec::new();

        let first_name = nullable(dto.first_name, &mut violations, |s| {
            PersonName::try_new_for_field("first_name", s)
        });
        let last_name = nullable(dto.last_name, &mut violations, |s| {
            PersonName::try_new_for_field("last_name", s)
        });
        let bio = nullable(dto.bio, &mut violations, Bio::try_new);
        let github_profile_url = nullable(dto.github_profile_url, &mut violations, GithubUrl::try_new);
        let linkedin_profile_url = nullable(dto.linkedin_profile_url, &mut violations, LinkedinUrl::try_new);
        let profile_picture_url = nullable(dto.profile_picture_url, &mut violations, ProfilePictureUrl::try_new);

        let email = match dto.email {
            None => None,
            Some(None) => {
                violations.push(("email", "Email cannot be null".into()));
                None
            }
            Some(Some(raw)) => Email::try_new(raw)
                .map_err(|e| record(&mut violations, e))
                .ok(),
        };

        if let Some(err) = DomainError::from_violations(violations) {
            return Err(err);
        }

        Ok(ProfilePatch {
            first_name,
            last_name,
            bio,
            email,
            github_profile_url,
            linkedin_profile_url,
            profile_picture_url,
        })
    }
}

fn nullable<T>(
    value: Option<Option<String>>,
    violations: &mut Vec<(&'static str, String)>,
    parse: impl FnOnce(String) -> Result<T>,
) -> Option<Option<T>> {
    match value {
        None => None,
        Some(None) => Some(None),
        Some(Some(raw)) => match parse(raw) {
            Ok(v) => Some(Some(v)),
            Err(e) => {
                record(violations, e);
                None
            }
        },
    }
}

fn record(violations: &mut Vec<(&'static str, String)>, err: DomainError) {
    match err {
        DomainError::Validation { field, reason } => violations.push((field, reason)),
        other => violations.push(("body", other.to_string())),
    }
}
