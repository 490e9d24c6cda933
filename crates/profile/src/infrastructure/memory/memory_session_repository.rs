// crates/profile/src/infrastructure/memory/memory_session_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::domain::value_objects::UserRole;

/// Jetons opaques en mémoire : jeton -> session.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<DashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre une session au jeton imposé (seed, tests)
    pub fn insert(&self, session: Session) {
        self.sessions.insert(session.token.clone(), session);
    }

    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn resolve(&self, token: &str) -> Result<Option<Session>> {
        Ok(self.sessions.get(token).map(|s| s.value().clone()))
    }

    async fn issue(&self, user_id: UserId, role: UserRole) -> Result<Session> {
        let session = Session::new(Uuid::new_v4().simple().to_string(), user_id, role);
        self.insert(session.clone());

        tracing::debug!(user_id = %user_id, role = role.as_str(), "Session issued");
        Ok(session)
    }
}
