//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::knowledge::KnowledgeBase;
use crate::types::DiseaseRecord;

/// Create a disease record with a placeholder description.
pub fn make_disease(name: &str, symptoms: &[&str]) -> DiseaseRecord {
    DiseaseRecord::new(name, symptoms, &format!("Description of {}", name))
}

/// Build a knowledge base from (name, symptoms) pairs, in order.
///
/// Panics on invalid input; tests are expected to pass valid tables.
pub fn make_kb(entries: &[(&str, &[&str])]) -> KnowledgeBase {
    let records = entries
        .iter()
        .map(|(name, symptoms)| make_disease(name, symptoms))
        .collect();
    KnowledgeBase::new(records).expect("test knowledge base must be valid")
}

/// The single-disease knowledge base used in the worked example:
/// common cold with six reference symptoms.
pub fn common_cold_kb() -> KnowledgeBase {
    make_kb(&[(
        "common cold",
        &[
            "sore throat",
            "runny nose",
            "stuffy nose",
            "sneezing",
            "mild headache",
            "fatigue",
        ],
    )])
}
