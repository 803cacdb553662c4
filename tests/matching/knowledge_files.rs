//! Loading a knowledge base from JSON and matching against it.

use crate::common::names;
use std::io::Write;
use symcheck::{analyze, CheckerConfig, KnowledgeBase, KnowledgeError};

const TABLE: &str = r#"[
    {"name": "Hay Fever", "symptoms": ["Sneezing", "itchy eyes"], "description": "Pollen allergy"},
    {"name": "Cold", "symptoms": ["sneezing", "sore throat", "cough"]}
]"#;

#[test]
fn test_json_table_round_trip_through_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TABLE.as_bytes()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let config =
        CheckerConfig::new(dir.path().to_path_buf(), Some(file.path().to_path_buf())).unwrap();
    let kb = config.load_knowledge_base().unwrap();

    assert_eq!(kb.len(), 2);
    assert_eq!(kb.get("Cold").unwrap().description, "");
    // Reference symptoms are lowercased on load, so mixed-case JSON still matches.
    let results = analyze("sneezing", &kb);
    assert_eq!(names(&results), vec!["Hay Fever", "Cold"]);
}

#[test]
fn test_duplicate_disease_rejected() {
    let json = r#"[{"name": "a", "symptoms": ["x"]}, {"name": "a", "symptoms": ["y"]}]"#;
    let err = KnowledgeBase::from_json_str(json).unwrap_err();
    assert!(matches!(err, KnowledgeError::DuplicateName { .. }));
}

#[test]
fn test_missing_file_is_read_error() {
    let err = KnowledgeBase::from_json_file(std::path::Path::new("/no/such/table.json"))
        .unwrap_err();
    assert!(matches!(err, KnowledgeError::FileRead(_)));
}
