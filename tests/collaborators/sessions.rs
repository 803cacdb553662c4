//! Session lifecycle and persistence.

use crate::common::{temp_config, test_session};
use symcheck::session::SessionState;
use symcheck::{Session, SessionError};

#[test]
fn test_no_file_means_not_authenticated() {
    let (_dir, config) = temp_config();
    let err = config.session_store().load().unwrap_err();
    assert!(matches!(err, SessionError::NotAuthenticated));
}

#[test]
fn test_save_then_load() {
    let (_dir, config) = temp_config();
    let store = config.session_store();
    let session = test_session();
    store.save(&session).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.user_id(), "user-1");
    assert_eq!(loaded.email(), "pat@example.com");
    assert!(loaded.is_active());
}

#[test]
fn test_clear_logs_out() {
    let (_dir, config) = temp_config();
    let store = config.session_store();
    store.save(&test_session()).unwrap();

    let ended = store.clear().unwrap().expect("a session was active");
    assert_eq!(ended.state(), SessionState::LoggedOut);
    assert!(!ended.is_active());
    assert!(matches!(store.load(), Err(SessionError::NotAuthenticated)));
    assert!(store.clear().unwrap().is_none());
}

#[test]
fn test_logged_out_session_on_disk_is_refused() {
    let (_dir, config) = temp_config();
    let store = config.session_store();
    let mut session = test_session();
    session.logout();
    store.save(&session).unwrap();
    assert!(matches!(store.load(), Err(SessionError::NotAuthenticated)));
}

#[test]
fn test_blank_user_id_rejected() {
    assert!(matches!(
        Session::login("  ", "x@example.com"),
        Err(SessionError::EmptyUserId)
    ));
}
