//! Persisted search history.

use crate::common::temp_config;
use symcheck::{HistoryStore, HISTORY_CAPACITY};

#[test]
fn test_missing_file_is_empty_history() {
    let (_dir, config) = temp_config();
    assert!(config.history_store().load().is_empty());
}

#[test]
fn test_records_newest_first_and_persists() {
    let (_dir, config) = temp_config();
    let store = config.history_store();
    store.record_best_effort("fever", 3);
    store.record_best_effort("cough, chest pain", 3);

    let history = store.load();
    assert_eq!(history.len(), 2);
    assert_eq!(history.get(0).unwrap().symptoms, "cough, chest pain");
    assert_eq!(history.get(1).unwrap().symptoms, "fever");
    assert_eq!(history.get(1).unwrap().results, 3);
}

#[test]
fn test_capacity_drops_oldest() {
    let (_dir, config) = temp_config();
    let store = config.history_store();
    for i in 0..HISTORY_CAPACITY + 2 {
        store.record_best_effort(&format!("symptom {}", i), i);
    }
    let history = store.load();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    let newest = format!("symptom {}", HISTORY_CAPACITY + 1);
    assert_eq!(history.get(0).unwrap().symptoms, newest);
    assert!(history.iter().all(|r| r.symptoms != "symptom 0"));
    assert!(history.iter().all(|r| r.symptoms != "symptom 1"));
}

#[test]
fn test_corrupt_file_is_ignored_then_overwritten() {
    let (_dir, config) = temp_config();
    std::fs::create_dir_all(config.data_dir()).unwrap();
    std::fs::write(config.history_path(), "{ not json").unwrap();

    let store = config.history_store();
    assert!(store.load().is_empty());
    store.record_best_effort("headache", 5);
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_stored_json_shape() {
    let (_dir, config) = temp_config();
    config.history_store().record_best_effort("  sneezing  ", 2);

    let raw = std::fs::read_to_string(config.history_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value[0];
    assert_eq!(entry["symptoms"], "sneezing");
    assert_eq!(entry["results"], 2);
    let ts = entry["timestamp"].as_str().unwrap();
    assert!(ts.ends_with('Z'), "timestamp not UTC: {}", ts);
    // 2026-01-01T00:00:00.000Z
    assert_eq!(ts.len(), 24);
}

#[test]
fn test_unwritable_location_is_not_fatal() {
    let file = tempfile::NamedTempFile::new().unwrap();
    // A regular file as the parent directory: every save fails.
    let store = HistoryStore::new(file.path().join("history.json"));
    let history = store.record_best_effort("fever", 3);
    assert_eq!(history.len(), 1);
    assert!(store.load().is_empty());
}

#[test]
fn test_clear_removes_history() {
    let (_dir, config) = temp_config();
    let store = config.history_store();
    store.record_best_effort("fever", 3);
    store.clear().unwrap();
    assert!(store.load().is_empty());
    // Clearing twice is fine.
    store.clear().unwrap();
}
