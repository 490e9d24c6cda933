// crates/profile/src/domain/repositories/user_profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::UserProfile;

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>>;

    /// Création (seed / provisioning). Échoue si l'identifiant existe déjà.
    async fn insert(&self, profile: &UserProfile) -> Result<()>;

    /// Sauvegarde avec Optimistic Locking : la version stockée doit valoir `expected_version`,
    /// sinon `DomainError::ConcurrencyConflict`.
    async fn save(
        &self,
        profile: &UserProfile,
        expected_version: i32,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<()>;
}
