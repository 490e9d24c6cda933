// crates/profile/src/application/update_profile/update_profile_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use shared_kernel::domain::events::AggregateRoot;
    use shared_kernel::domain::repositories::OutboxRepositoryStub;
    use shared_kernel::domain::transaction::StubTxManager;
    use shared_kernel::domain::value_objects::UserId;
    use shared_kernel::errors::DomainError;

    use crate::application::update_profile::{UpdateProfileCommand, UpdateProfileUseCase};
    use crate::domain::entities::{Actor, UserProfile};
    use crate::domain::events::ProfileEvent;
    use crate::domain::params::ProfilePatch;
    use crate::domain::repositories::UserProfileRepositoryStub;
    use crate::domain::value_objects::{Bio, Email, PersonName, ProfileField, UserRole};

    struct Fixture {
        repo: Arc<UserProfileRepositoryStub>,
        outbox: Arc<OutboxRepositoryStub>,
        tx: Arc<StubTxManager>,
        use_case: UpdateProfileUseCase,
    }

    /// Helper pour configurer le Use Case avec ses dépendances
    fn setup(profile: Option<UserProfile>) -> Fixture {
        let repo = Arc::new(UserProfileRepositoryStub {
            profile_to_return: Mutex::new(profile),
            ..Default::default()
        });
        let outbox = Arc::new(OutboxRepositoryStub::new());
        let tx = Arc::new(StubTxManager::default());

        let use_case = UpdateProfileUseCase::new(repo.clone(), outbox.clone(), tx.clone());
        Fixture { repo, outbox, tx, use_case }
    }

    fn alice() -> UserProfile {
        UserProfile::builder(UserId::new(), Email::try_new("alice@example.com").unwrap())
            .with_first_name(PersonName::try_new("Alice").unwrap())
            .with_bio(Bio::try_new("Old bio").unwrap())
            .build()
    }

    fn bio_patch(text: &str) -> ProfilePatch {
        ProfilePatch::new().with_bio(Some(Bio::try_new(text).unwrap()))
    }

    #[tokio::test]
    async fn test_update_profile_success() {
        // Arrange
        let profile = alice();
        let user_id = *profile.id();
        let f = setup(Some(profile));

        // Act
        let result = f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(user_id, UserRole::User),
            user_id,
            patch: bio_patch("New bio text"),
        }).await;

        // Assert
        let updated = result.unwrap();
        assert_eq!(updated.bio().unwrap().as_str(), "New bio text");
        assert_eq!(updated.email().as_str(), "alice@example.com");
        assert_eq!(updated.version(), 2);

        let saved = f.repo.saved.lock().unwrap().clone();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, 1); // version attendue = version chargée

        assert_eq!(f.tx.commits(), 1);
    }

    #[tokio::test]
    async fn test_update_profile_writes_one_outbox_event_naming_fields() {
        let profile = alice();
        let user_id = *profile.id();
        let f = setup(Some(profile));

        let patch = ProfilePatch::new()
            .with_first_name(Some(PersonName::try_new("Updated").unwrap()))
            .with_last_name(Some(PersonName::try_new("Name").unwrap()))
            .with_bio(Some(Bio::try_new("New bio").unwrap()));

        f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(user_id, UserRole::User),
            user_id,
            patch,
        }).await.unwrap();

        let events = f.outbox.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, ProfileEvent::PROFILE_UPDATED);

        match events[0].decode::<ProfileEvent>(ProfileEvent::AGGREGATE_TYPE).unwrap() {
            ProfileEvent::ProfileUpdated { changed_fields, .. } => assert_eq!(
                changed_fields,
                vec![ProfileField::FirstName, ProfileField::LastName, ProfileField::Bio]
            ),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_profile_idempotency() {
        // Arrange : bio identique à l'existante
        let profile = alice();
        let user_id = *profile.id();
        let f = setup(Some(profile));

        // Act
        let updated = f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(user_id, UserRole::User),
            user_id,
            patch: bio_patch("Old bio"),
        }).await.unwrap();

        // Assert : ni sauvegarde, ni événement, ni nouvelle version
        assert_eq!(updated.version(), 1);
        assert_eq!(f.repo.save_count(), 0);
        assert!(f.outbox.events().is_empty());
        assert_eq!(f.tx.commits(), 0);
    }

    #[tokio::test]
    async fn test_manager_updates_other_profile() {
        let profile = alice();
        let user_id = *profile.id();
        let f = setup(Some(profile));

        let updated = f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(UserId::new(), UserRole::Manager),
            user_id,
            patch: bio_patch("Updated by manager"),
        }).await.unwrap();

        assert_eq!(updated.bio().unwrap().as_str(), "Updated by manager");
    }

    #[tokio::test]
    async fn test_stranger_is_forbidden_before_any_io() {
        let f = setup(None);

        let result = f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(UserId::new(), UserRole::User),
            user_id: UserId::new(),
            patch: bio_patch("Hacked"),
        }).await;

        // Forbidden et non NotFound : le contrôle d'accès passe avant le chargement
        assert!(matches!(result, Err(DomainError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_empty_patch_is_rejected() {
        let profile = alice();
        let user_id = *profile.id();
        let f = setup(Some(profile));

        let result = f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(user_id, UserRole::User),
            user_id,
            patch: ProfilePatch::new(),
        }).await;

        assert!(matches!(result, Err(DomainError::Validation { field: "body", .. })));
    }

    #[tokio::test]
    async fn test_update_profile_not_found() {
        let f = setup(None);
        let user_id = UserId::new();

        let result = f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(UserId::new(), UserRole::Admin),
            user_id,
            patch: bio_patch("Anything"),
        }).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_conflict_is_retried() {
        let profile = alice();
        let user_id = *profile.id();
        let f = setup(Some(profile));
        *f.repo.conflicts_remaining.lock().unwrap() = 2;

        let result = f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(user_id, UserRole::User),
            user_id,
            patch: bio_patch("Eventually"),
        }).await;

        assert!(result.is_ok());
        assert_eq!(f.repo.save_count(), 1);
        // Les tentatives avortées n'ont rien écrit dans l'outbox
        assert_eq!(f.outbox.events().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_conflict_gives_up() {
        let profile = alice();
        let user_id = *profile.id();
        let f = setup(Some(profile));
        *f.repo.error_to_return.lock().unwrap() = Some(DomainError::ConcurrencyConflict {
            reason: "Version mismatch".into(),
        });

        let result = f.use_case.execute(UpdateProfileCommand {
            actor: Actor::new(user_id, UserRole::User),
            user_id,
            patch: bio_patch("Never"),
        }).await;

        assert!(matches!(result, Err(DomainError::TooManyConflicts(_))));
    }

    #[tokio::test]
    async fn test_outbox_failure_aborts_the_transaction() {
        let profile = alice();
        let user_id = *profile.id();
        let repo = Arc::new(UserProfileRepositoryStub::with_profile(profile));
        let tx = Arc::new(StubTxManager::default());
        let use_case = UpdateProfileUseCase::new(
            repo,
            Arc::new(OutboxRepositoryStub::failing(DomainError::Internal("Outbox capacity reached".into()))),
            tx.clone(),
        );

        let result = use_case.execute(UpdateProfileCommand {
            actor: Actor::new(user_id, UserRole::User),
            user_id,
            patch: bio_patch("Failing update"),
        }).await;

        // Si l'Outbox échoue, le Use Case remonte l'erreur et rien n'est validé
        assert!(matches!(result, Err(DomainError::Internal(_))));
        assert_eq!(tx.commits(), 0);
    }
}
