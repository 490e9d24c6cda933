// crates/profile/src/domain/repositories/session_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::Session;
use crate::domain::value_objects::UserRole;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Résout un jeton Bearer. `None` si le jeton est inconnu.
    async fn resolve(&self, token: &str) -> Result<Option<Session>>;

    /// Émet un nouveau jeton opaque pour l'utilisateur
    async fn issue(&self, user_id: UserId, role: UserRole) -> Result<Session>;
}
