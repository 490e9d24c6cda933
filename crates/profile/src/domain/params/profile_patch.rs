// crates/profile/src/domain/params/profile_patch.rs

use crate::domain::value_objects::{
    Bio, Email, GithubUrl, LinkedinUrl, PersonName, ProfileField, ProfilePictureUrl,
};

/// Mise à jour partielle déjà validée.
/// Champs nullables à trois états : `None` = absent, `Some(None)` = effacer, `Some(Some(v))` = remplacer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub first_name: Option<Option<PersonName>>,
    pub last_name: Option<Option<PersonName>>,
    pub bio: Option<Option<Bio>>,
    /// L'email ne peut pas être effacé
    pub email: Option<Email>,
    pub github_profile_url: Option<Option<GithubUrl>>,
    pub linkedin_profile_url: Option<Option<LinkedinUrl>>,
    pub profile_picture_url: Option<Option<ProfilePictureUrl>>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.provided_fields().is_empty()
    }

    /// Champs présents dans la requête, qu'ils changent la valeur stockée ou non
    pub fn provided_fields(&self) -> Vec<ProfileField> {
        let mut fields = Vec::new();
        if self.first_name.is_some() { fields.push(ProfileField::FirstName); }
        if self.last_name.is_some() { fields.push(ProfileField::LastName); }
        if self.bio.is_some() { fields.push(ProfileField::Bio); }
        if self.email.is_some() { fields.push(ProfileField::Email); }
        if self.github_profile_url.is_some() { fields.push(ProfileField::GithubProfileUrl); }
        if self.linkedin_profile_url.is_some() { fields.push(ProfileField::LinkedinProfileUrl); }
        if self.profile_picture_url.is_some() { fields.push(ProfileField::ProfilePictureUrl); }
        fields
    }

    // --- Fluent Setters ---

    pub fn with_first_name(mut self, v: Option<PersonName>) -> Self { self.first_name = Some(v); self }
    pub fn with_last_name(mut self, v: Option<PersonName>) -> Self { self.last_name = Some(v); self }
    pub fn with_bio(mut self, v: Option<Bio>) -> Self { self.bio = Some(v); self }
    pub fn with_email(mut self, v: Email) -> Self { self.email = Some(v); self }
    pub fn with_github_profile_url(mut self, v: Option<GithubUrl>) -> Self { self.github_profile_url = Some(v); self }
    pub fn with_linkedin_profile_url(mut self, v: Option<LinkedinUrl>) -> Self { self.linkedin_profile_url = Some(v); self }
    pub fn with_profile_picture_url(mut self, v: Option<ProfilePictureUrl>) -> Self { self.profile_picture_url = Some(v); self }
}
