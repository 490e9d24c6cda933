use shared_kernel::domain::events::{AggregateRoot, EventEnvelope};
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::DomainError;
use crate::domain::entities::{Actor, UserProfile};
use crate::domain::events::ProfileEvent;
use crate::domain::params::ProfilePatch;
use crate::domain::value_objects::{
    Bio, Email, GithubUrl, PersonName, ProfileField, UserRole,
};

fn profile() -> UserProfile {
    UserProfile::builder(UserId::new(), Email::try_new("alice@example.com").unwrap())
        .with_first_name(PersonName::try_new("Alice").unwrap())
        .with_last_name(PersonName::try_new("Liddell").unwrap())
        .with_bio(Bio::try_new("Original bio").unwrap())
        .build()
}

fn owner(p: &UserProfile) -> Actor {
    Actor::new(*p.id(), UserRole::User)
}

#[test]
fn test_partial_update_leaves_other_fields_untouched() {
    let mut p = profile();
    let actor = owner(&p);

    let changed = p
        .apply_patch(&actor, ProfilePatch::new().with_bio(Some(Bio::try_new("New bio text").unwrap())))
        .unwrap();

    assert_eq!(changed, vec![ProfileField::Bio]);
    assert_eq!(p.bio().unwrap().as_str(), "New bio text");
    assert_eq!(p.first_name().unwrap().as_str(), "Alice");
    assert_eq!(p.last_name().unwrap().as_str(), "Liddell");
    assert_eq!(p.email().as_str(), "alice@example.com");
    assert_eq!(p.version(), 2);
}

#[test]
fn test_multi_field_update_emits_exactly_one_event() {
    let mut p = profile();
    let actor = owner(&p);

    let patch = ProfilePatch::new()
        .with_first_name(Some(PersonName::try_new("Updated").unwrap()))
        .with_last_name(Some(PersonName::try_new("Name").unwrap()))
        .with_github_profile_url(Some(GithubUrl::try_new("https://github.com/alice").unwrap()));

    p.apply_patch(&actor, patch).unwrap();

    let events = p.pull_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type(), ProfileEvent::PROFILE_UPDATED);

    let event = EventEnvelope::wrap(events[0].as_ref())
        .decode::<ProfileEvent>(ProfileEvent::AGGREGATE_TYPE)
        .unwrap();
    match event {
        ProfileEvent::ProfileUpdated { changed_fields, changed_by, .. } => {
            assert_eq!(
                changed_fields,
                vec![ProfileField::FirstName, ProfileField::LastName, ProfileField::GithubProfileUrl]
            );
            assert_eq!(changed_by, actor.user_id);
        }
        other => panic!("unexpected event: {:?}", other),
    }
    assert_eq!(p.version(), 2);
}

#[test]
fn test_email_change_keeps_previous_address_in_event() {
    let mut p = profile();
    let actor = owner(&p);

    p.apply_patch(&actor, ProfilePatch::new().with_email(Email::try_new("alice.new@example.com").unwrap()))
        .unwrap();

    let events = p.pull_events();
    let event = EventEnvelope::wrap(events[0].as_ref())
        .decode::<ProfileEvent>(ProfileEvent::AGGREGATE_TYPE)
        .unwrap();
    match event {
        ProfileEvent::ProfileUpdated { email, previous_email, .. } => {
            assert_eq!(email.as_str(), "alice.new@example.com");
            assert_eq!(previous_email.unwrap().as_str(), "alice@example.com");
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_previous_email_absent_when_email_unchanged() {
    let mut p = profile();
    let actor = owner(&p);

    p.apply_patch(&actor, ProfilePatch::new().with_bio(Some(Bio::try_new("Other bio").unwrap())))
        .unwrap();

    let events = p.pull_events();
    let event = EventEnvelope::wrap(events[0].as_ref())
        .decode::<ProfileEvent>(ProfileEvent::AGGREGATE_TYPE)
        .unwrap();
    assert!(matches!(event, ProfileEvent::ProfileUpdated { previous_email: None, .. }));
}

#[test]
fn test_identical_values_are_idempotent() {
    let mut p = profile();
    let actor = owner(&p);

    let changed = p
        .apply_patch(&actor, ProfilePatch::new().with_first_name(Some(PersonName::try_new("Alice").unwrap())))
        .unwrap();

    assert!(changed.is_empty());
    assert_eq!(p.pull_events().len(), 0);
    assert_eq!(p.version(), 1);
}

#[test]
fn test_only_actually_changed_fields_are_reported() {
    let mut p = profile();
    let actor = owner(&p);

    let patch = ProfilePatch::new()
        .with_first_name(Some(PersonName::try_new("Alice").unwrap()))
        .with_bio(Some(Bio::try_new("Another bio").unwrap()));

    assert_eq!(p.apply_patch(&actor, patch).unwrap(), vec![ProfileField::Bio]);
}

#[test]
fn test_null_clears_nullable_field() {
    let mut p = profile();
    let actor = owner(&p);

    let changed = p.apply_patch(&actor, ProfilePatch::new().with_bio(None)).unwrap();

    assert_eq!(changed, vec![ProfileField::Bio]);
    assert!(p.bio().is_none());
}

#[test]
fn test_stranger_cannot_patch() {
    let mut p = profile();
    let stranger = Actor::new(UserId::new(), UserRole::User);

    let result = p.apply_patch(&stranger, ProfilePatch::new().with_bio(None));

    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
    assert!(p.bio().is_some());
    assert_eq!(p.version(), 1);
}

#[test]
fn test_manager_can_patch_other_profile() {
    let mut p = profile();
    let manager = Actor::new(UserId::new(), UserRole::Manager);

    p.apply_patch(&manager, ProfilePatch::new().with_bio(Some(Bio::try_new("Updated by manager").unwrap())))
        .unwrap();

    assert_eq!(p.bio().unwrap().as_str(), "Updated by manager");
}

#[test]
fn test_professional_status_promotion() {
    let mut p = profile();
    let admin = Actor::new(UserId::new(), UserRole::Admin);

    assert!(p.set_professional_status(&admin, true).unwrap());
    assert!(p.is_professional());
    assert!(p.professional_status_updated_at().is_some());

    let events = p.pull_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type(), ProfileEvent::PROFESSIONAL_STATUS_CHANGED);
}

#[test]
fn test_professional_status_is_idempotent() {
    let mut p = profile();
    let manager = Actor::new(UserId::new(), UserRole::Manager);

    assert!(!p.set_professional_status(&manager, false).unwrap());
    assert!(p.pull_events().is_empty());
    assert_eq!(p.version(), 1);
}

#[test]
fn test_user_cannot_change_professional_status_even_own() {
    let mut p = profile();
    let actor = owner(&p);

    let result = p.set_professional_status(&actor, true);

    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
    assert!(!p.is_professional());
}

#[test]
fn test_clone_drops_pending_events() {
    let mut p = profile();
    let actor = owner(&p);
    p.apply_patch(&actor, ProfilePatch::new().with_bio(None)).unwrap();

    let mut copy = p.clone();

    assert!(copy.pull_events().is_empty());
    assert_eq!(copy.version(), 2);
}
