// crates/profile/src/domain/repositories/user_profile_repository_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;

// --- STUB USER PROFILE REPOSITORY ---
#[derive(Default)]
pub struct UserProfileRepositoryStub {
    pub profile_to_return: Mutex<Option<UserProfile>>,
    /// Erreur renvoyée à chaque `save`
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Nombre de `save` qui échoueront sur un conflit de version avant de réussir
    pub conflicts_remaining: Mutex<u32>,
    pub saved: Mutex<Vec<(UserProfile, i32)>>,
}

impl UserProfileRepositoryStub {
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile_to_return: Mutex::new(Some(profile)),
            ..Default::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

#[async_trait]
impl UserProfileRepository for UserProfileRepositoryStub {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<UserProfile>> {
        Ok(self.profile_to_return.lock().unwrap().clone())
    }

    async fn insert(&self, profile: &UserProfile) -> Result<()> {
        *self.profile_to_return.lock().unwrap() = Some(profile.clone());
        Ok(())
    }

    async fn save(&self, profile: &UserProfile, expected_version: i32, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }

        {
            let mut remaining = self.conflicts_remaining.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(DomainError::ConcurrencyConflict {
                    reason: "Version mismatch".into(),
                });
            }
        }

        self.saved.lock().unwrap().push((profile.clone(), expected_version));
        Ok(())
    }
}
