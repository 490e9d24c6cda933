use crate::domain::value_objects::UserRole;

#[test]
fn test_role_ordering() {
    assert!(UserRole::Admin > UserRole::Manager);
    assert!(UserRole::Manager > UserRole::User);
}

#[test]
fn test_role_permissions() {
    assert!(!UserRole::User.can_change_professional_status());
    assert!(UserRole::Manager.can_change_professional_status());
    assert!(UserRole::Admin.can_manage_profiles());
    assert!(!UserRole::User.can_manage_profiles());
}

#[test]
fn test_role_parsing() {
    assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
    assert_eq!(" manager ".parse::<UserRole>().unwrap(), UserRole::Manager);
    assert_eq!(UserRole::try_new("authenticated").unwrap(), UserRole::User);
    assert!(UserRole::try_new("root").is_err());
}

#[test]
fn test_role_serde_lowercase() {
    assert_eq!(serde_json::to_string(&UserRole::Manager).unwrap(), "\"manager\"");
}
