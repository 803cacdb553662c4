//! Profile fetch and update through the file-backed source.

use crate::common::{temp_config, test_session};
use symcheck::{ProfileError, ProfileSource, ProfileUpdate, Session};

#[test]
fn test_fetch_before_create_is_not_found() {
    let (_dir, config) = temp_config();
    let err = config.profile_source().fetch(&test_session()).unwrap_err();
    assert!(matches!(err, ProfileError::NotFound { .. }));
}

#[test]
fn test_fetch_or_create_then_fetch() {
    let (_dir, config) = temp_config();
    let source = config.profile_source();
    let session = test_session();

    let created = source.fetch_or_create(&session).unwrap();
    assert_eq!(created.id, "user-1");
    assert!(created.is_active);
    assert!(!created.is_verified);

    let fetched = source.fetch(&session).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_update_persists() {
    let (_dir, config) = temp_config();
    let source = config.profile_source();
    let session = test_session();
    source.fetch_or_create(&session).unwrap();

    let update = ProfileUpdate {
        first_name: Some("Pat".into()),
        city: Some("Lisbon".into()),
        ..ProfileUpdate::default()
    };
    let updated = source.update(&session, &update).unwrap();
    assert_eq!(updated.display_name(), "Pat");

    let fetched = source.fetch(&session).unwrap();
    assert_eq!(fetched.city.as_deref(), Some("Lisbon"));
}

#[test]
fn test_logged_out_session_cannot_fetch() {
    let (_dir, config) = temp_config();
    let source = config.profile_source();
    let mut session = test_session();
    source.fetch_or_create(&session).unwrap();
    session.logout();
    assert!(matches!(
        source.fetch(&session),
        Err(ProfileError::NotAuthenticated)
    ));
}

#[test]
fn test_other_user_sees_mismatch() {
    let (_dir, config) = temp_config();
    let source = config.profile_source();
    source.fetch_or_create(&test_session()).unwrap();

    let other = Session::login("user-2", "sam@example.com").unwrap();
    assert!(matches!(
        source.fetch(&other),
        Err(ProfileError::UserMismatch { .. })
    ));
    // Logging in as the new user replaces the stored profile.
    let replaced = source.fetch_or_create(&other).unwrap();
    assert_eq!(replaced.id, "user-2");
}

#[test]
fn test_incomplete_profile_is_typed_failure() {
    let (_dir, config) = temp_config();
    std::fs::create_dir_all(config.data_dir()).unwrap();
    std::fs::write(config.profile_path(), r#"{"id": "user-1"}"#).unwrap();
    let err = config.profile_source().fetch(&test_session()).unwrap_err();
    assert!(matches!(err, ProfileError::Incomplete(_)));
}
