// crates/profile/src/infrastructure/memory/memory_user_profile_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::events::AggregateRoot;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::memory::TransactionExt;

use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;

/// Stockage des profils en mémoire (les clones partagent la même table).
#[derive(Clone, Default)]
pub struct InMemoryUserProfileRepository {
    profiles: Arc<DashMap<UserId, UserProfile>>,
}

impl InMemoryUserProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn check_version(&self, id: &UserId, expected_version: i32) -> Result<()> {
        let current = self.profiles
            .get(id)
            .map(|p| p.version())
            .ok_or_else(|| UserProfile::not_found(id))?;

        if current != expected_version {
            return Err(DomainError::ConcurrencyConflict {
                reason: format!("Profile {id} is at version {current}, expected {expected_version}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserProfileRepository for InMemoryUserProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>> {
        Ok(self.profiles.get(id).map(|p| p.value().clone()))
    }

    async fn insert(&self, profile: &UserProfile) -> Result<()> {
        match self.profiles.entry(*profile.id()) {
            Entry::Occupied(_) => Err(DomainError::Validation {
                field: "id",
                reason: format!("Profile {} already exists", profile.id()),
            }),
            Entry::Vacant(slot) => {
                slot.insert(profile.clone());
                Ok(())
            }
        }
    }

    async fn save(
        &self,
        profile: &UserProfile,
        expected_version: i32,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<()> {
        match tx {
            // Écriture différée : visible seulement au commit.
            // Les transactions étant sérialisées, la version lue ici ne bouge pas d'ici là.
            Some(tx) => {
                self.check_version(profile.id(), expected_version)?;

                let profiles = self.profiles.clone();
                let snapshot = profile.clone();
                tx.downcast_mut_memory()?.stage(move || {
                    profiles.insert(*snapshot.id(), snapshot);
                });
                Ok(())
            }
            None => {
                // Vérification et écriture sous le même verrou de shard
                let mut slot = self.profiles
                    .get_mut(profile.id())
                    .ok_or_else(|| UserProfile::not_found(profile.id()))?;

                if slot.version() != expected_version {
                    return Err(DomainError::ConcurrencyConflict {
                        reason: format!(
                            "Profile {} is at version {}, expected {}",
                            profile.id(), slot.version(), expected_version
                        ),
                    });
                }
                *slot = profile.clone();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_kernel::infrastructure::memory::MemoryTransactionManager;
    use shared_kernel::infrastructure::TransactionManagerExt;
    use crate::domain::entities::Actor;
    use crate::domain::params::ProfilePatch;
    use crate::domain::value_objects::{Bio, Email, UserRole};

    fn profile() -> UserProfile {
        UserProfile::builder(UserId::new(), Email::try_new("frank@example.com").unwrap()).build()
    }

    fn edited(mut p: UserProfile, bio: &str) -> UserProfile {
        let actor = Actor::new(*p.id(), UserRole::User);
        p.apply_patch(&actor, ProfilePatch::new().with_bio(Some(Bio::try_new(bio).unwrap())))
            .unwrap();
        p
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = InMemoryUserProfileRepository::new();
        let p = profile();
        repo.insert(&p).await.unwrap();

        let found = repo.find_by_id(p.id()).await.unwrap().unwrap();
        assert_eq!(found.email().as_str(), "frank@example.com");
        assert!(repo.insert(&p).await.is_err());
    }

    #[tokio::test]
    async fn test_save_without_tx_checks_version() {
        let repo = InMemoryUserProfileRepository::new();
        let p = profile();
        repo.insert(&p).await.unwrap();

        let v2 = edited(p.clone(), "first");
        repo.save(&v2, 1, None).await.unwrap();

        // Écrivain en retard : il a chargé la version 1
        let stale = edited(p, "second");
        let err = repo.save(&stale, 1, None).await.unwrap_err();
        assert!(err.is_concurrency_conflict());

        let stored = repo.find_by_id(v2.id()).await.unwrap().unwrap();
        assert_eq!(stored.bio().unwrap().as_str(), "first");
        assert_eq!(stored.version(), 2);
    }

    #[tokio::test]
    async fn test_save_in_tx_is_visible_after_commit_only() {
        let repo = InMemoryUserProfileRepository::new();
        let p = profile();
        repo.insert(&p).await.unwrap();
        let tx_manager = MemoryTransactionManager::new();

        let updated = edited(p.clone(), "committed");
        let r = repo.clone();
        let snapshot = updated.clone();
        tx_manager.run_in_transaction(move |mut tx| async move {
            r.save(&snapshot, 1, Some(&mut *tx)).await?;
            tx.commit().await
        }).await.unwrap();

        let stored = repo.find_by_id(p.id()).await.unwrap().unwrap();
        assert_eq!(stored.bio().unwrap().as_str(), "committed");
    }

    #[tokio::test]
    async fn test_save_in_tx_without_commit_is_discarded() {
        let repo = InMemoryUserProfileRepository::new();
        let p = profile();
        repo.insert(&p).await.unwrap();
        let tx_manager = MemoryTransactionManager::new();

        let updated = edited(p.clone(), "rolled back");
        let r = repo.clone();
        let _ = tx_manager.run_in_transaction(move |mut tx| async move {
            r.save(&updated, 1, Some(&mut *tx)).await?;
            Err(DomainError::Internal("boom".into()))
        }).await;

        let stored = repo.find_by_id(p.id()).await.unwrap().unwrap();
        assert!(stored.bio().is_none());
        assert_eq!(stored.version(), 1);
    }

    #[tokio::test]
    async fn test_save_unknown_profile() {
        let repo = InMemoryUserProfileRepository::new();
        let err = repo.save(&profile(), 1, None).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
