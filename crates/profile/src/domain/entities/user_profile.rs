// crates/profile/src/domain/entities/user_profile.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;
use shared_kernel::domain::events::{AggregateMetadata, AggregateRoot};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::builders::UserProfileBuilder;
use crate::domain::entities::Actor;
use crate::domain::events::ProfileEvent;
use crate::domain::params::ProfilePatch;
use crate::domain::value_objects::{
    Bio, Email, GithubUrl, LinkedinUrl, PersonName, ProfileField, ProfilePictureUrl,
};

/// Agrégat racine du contexte Profil.
/// Toute valeur stockée a déjà passé la validation de son Value Object.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub(crate) id: UserId,
    pub(crate) first_name: Option<PersonName>,
    pub(crate) last_name: Option<PersonName>,
    pub(crate) bio: Option<Bio>,
    pub(crate) email: Email,
    pub(crate) github_profile_url: Option<GithubUrl>,
    pub(crate) linkedin_profile_url: Option<LinkedinUrl>,
    pub(crate) profile_picture_url: Option<ProfilePictureUrl>,
    pub(crate) is_professional: bool,
    pub(crate) professional_status_updated_at: Option<DateTime<Utc>>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) metadata: AggregateMetadata,
}

impl UserProfile {
    pub fn builder(id: UserId, email: Email) -> UserProfileBuilder {
        UserProfileBuilder::new(id, email)
    }

    // --- Getters ---

    pub fn id(&self) -> &UserId { &self.id }
    pub fn first_name(&self) -> Option<&PersonName> { self.first_name.as_ref() }
    pub fn last_name(&self) -> Option<&PersonName> { self.last_name.as_ref() }
    pub fn bio(&self) -> Option<&Bio> { self.bio.as_ref() }
    pub fn email(&self) -> &Email { &self.email }
    pub fn github_profile_url(&self) -> Option<&GithubUrl> { self.github_profile_url.as_ref() }
    pub fn linkedin_profile_url(&self) -> Option<&LinkedinUrl> { self.linkedin_profile_url.as_ref() }
    pub fn profile_picture_url(&self) -> Option<&ProfilePictureUrl> { self.profile_picture_url.as_ref() }
    pub fn is_professional(&self) -> bool { self.is_professional }
    pub fn professional_status_updated_at(&self) -> Option<DateTime<Utc>> { self.professional_status_updated_at }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    /// Fusionne une mise à jour partielle.
    /// Renvoie la liste des champs réellement modifiés : vide si les valeurs étaient identiques
    /// (aucun événement, pas de changement de version).
    pub fn apply_patch(&mut self, actor: &Actor, patch: ProfilePatch) -> Result<Vec<ProfileField>> {
        // 1. Contrôle d'accès (propriétaire ou manager/admin)
        actor.ensure_can_edit_profile_of(&self.id)?;

        let ProfilePatch {
            first_name,
            last_name,
            bio,
            email,
            github_profile_url,
            linkedin_profile_url,
            profile_picture_url,
        } = patch;

        // 2. Fusion champ par champ, les absents restent intacts
        let previous_email = self.email.clone();
        let mut changed = Vec::new();
        if let Some(v) = first_name && replace_if_changed(&mut self.first_name, v) {
            changed.push(ProfileField::FirstName);
        }
        if let Some(v) = last_name && replace_if_changed(&mut self.last_name, v) {
            changed.push(ProfileField::LastName);
        }
        if let Some(v) = bio && replace_if_changed(&mut self.bio, v) {
            changed.push(ProfileField::Bio);
        }
        if let Some(v) = email && replace_if_changed(&mut self.email, v) {
            changed.push(ProfileField::Email);
        }
        if let Some(v) = github_profile_url && replace_if_changed(&mut self.github_profile_url, v) {
            changed.push(ProfileField::GithubProfileUrl);
        }
        if let Some(v) = linkedin_profile_url && replace_if_changed(&mut self.linkedin_profile_url, v) {
            changed.push(ProfileField::LinkedinProfileUrl);
        }
        if let Some(v) = profile_picture_url && replace_if_changed(&mut self.profile_picture_url, v) {
            changed.push(ProfileField::ProfilePictureUrl);
        }

        // 3. Idempotence
        if changed.is_empty() {
            return Ok(changed);
        }

        // 4. Un seul événement pour l'ensemble des champs modifiés
        self.apply_change();
        self.add_event(Box::new(ProfileEvent::ProfileUpdated {
            id: Uuid::now_v7(),
            user_id: self.id,
            email: self.email.clone(),
            previous_email: changed.contains(&ProfileField::Email).then_some(previous_email),
            first_name: self.first_name_string(),
            changed_fields: changed.clone(),
            changed_by: actor.user_id,
            occurred_at: self.updated_at,
        }));

        Ok(changed)
    }

    /// Promotion / révocation du statut professionnel (managers et admins uniquement).
    /// Renvoie `false` si le statut était déjà celui demandé.
    pub fn set_professional_status(&mut self, actor: &Actor, is_professional: bool) -> Result<bool> {
        actor.ensure_can_change_professional_status()?;

        if self.is_professional == is_professional {
            return Ok(false);
        }

        self.is_professional = is_professional;
        self.apply_change();
        self.professional_status_updated_at = Some(self.updated_at);

        self.add_event(Box::new(ProfileEvent::ProfessionalStatusChanged {
            id: Uuid::now_v7(),
            user_id: self.id,
            email: self.email.clone(),
            first_name: self.first_name_string(),
            is_professional,
            changed_by: actor.user_id,
            occurred_at: self.updated_at,
        }));

        Ok(true)
    }

    // Helpers
    fn apply_change(&mut self) {
        self.increment_version();
        self.updated_at = Utc::now();
    }

    fn first_name_string(&self) -> Option<String> {
        self.first_name.as_ref().map(|n| n.as_str().to_string())
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl EntityMetadata for UserProfile {
    fn entity_name() -> &'static str { "UserProfile" }
}

impl AggregateRoot for UserProfile {
    fn id(&self) -> String { self.id.to_string() }
    fn metadata(&self) -> &AggregateMetadata { &self.metadata }
    fn metadata_mut(&mut self) -> &mut AggregateMetadata { &mut self.metadata }
}
