// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The disease knowledge base: what the matcher compares symptoms against.
//!
//! A knowledge base is an ordered list of [`DiseaseRecord`]s plus a name index.
//! It's built once at startup, validated at construction, and never mutated
//! afterwards. Iteration order is insertion order, and that order is the
//! tie-break when two diseases score the same.
//!
//! # Invariants (checked by [`KnowledgeBase::new`])
//!
//! - Names are non-empty and unique (after trimming).
//! - Every record has at least one reference symptom.
//! - Reference symptoms are stored lower-case and trimmed, and none is empty.
//!   An empty reference symptom is a substring of everything and would match
//!   every input.

mod diseases;
pub mod vocabulary;

use crate::types::DiseaseRecord;
use crate::utils::normalize_term;
use std::collections::HashMap;
use std::path::Path;

pub use vocabulary::{append_symptom, common_symptoms, suggest, COMMON_SYMPTOMS};

/// Why a knowledge base was rejected.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("disease name cannot be empty (record {index})")]
    EmptyName { index: usize },
    #[error("duplicate disease name: {name}")]
    DuplicateName { name: String },
    #[error("disease '{name}' has no reference symptoms")]
    NoSymptoms { name: String },
    #[error("disease '{name}' has an empty reference symptom at position {position}")]
    EmptySymptom { name: String, position: usize },
    #[error("failed to read knowledge base file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to parse knowledge base: {0}")]
    Parse(serde_json::Error),
}

/// Immutable, validated disease table.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<DiseaseRecord>,
    by_name: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Validate and index a list of records, keeping their order.
    pub fn new(records: Vec<DiseaseRecord>) -> Result<Self, KnowledgeError> {
        let mut validated = Vec::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let name = record.name.trim().to_string();
            if name.is_empty() {
                return Err(KnowledgeError::EmptyName { index });
            }
            if record.reference_symptoms.is_empty() {
                return Err(KnowledgeError::NoSymptoms { name });
            }

            let mut reference_symptoms = Vec::with_capacity(record.reference_symptoms.len());
            for (position, symptom) in record.reference_symptoms.iter().enumerate() {
                let symptom = normalize_term(symptom);
                if symptom.is_empty() {
                    return Err(KnowledgeError::EmptySymptom { name, position });
                }
                reference_symptoms.push(symptom);
            }

            if by_name.insert(name.clone(), validated.len()).is_some() {
                return Err(KnowledgeError::DuplicateName { name });
            }
            validated.push(DiseaseRecord {
                name,
                reference_symptoms,
                description: record.description,
            });
        }

        Ok(KnowledgeBase {
            records: validated,
            by_name,
        })
    }

    /// The eight-disease table the checker ships with.
    pub fn builtin() -> Self {
        let records = diseases::BUILTIN_DISEASES
            .iter()
            .map(|(name, symptoms, description)| DiseaseRecord::new(name, symptoms, description))
            .collect();
        // The built-in table is covered by tests; failing here is a programming error.
        Self::new(records).expect("built-in knowledge base is valid")
    }

    /// Parse a JSON array of `{name, symptoms, description}` records.
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        let records: Vec<DiseaseRecord> =
            serde_json::from_str(json).map_err(KnowledgeError::Parse)?;
        Self::new(records)
    }

    /// Load a knowledge base from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, KnowledgeError> {
        let raw = std::fs::read_to_string(path).map_err(KnowledgeError::FileRead)?;
        let kb = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), diseases = kb.len(), "loaded knowledge base");
        Ok(kb)
    }

    pub fn get(&self, name: &str) -> Option<&DiseaseRecord> {
        self.by_name.get(name.trim()).map(|&i| &self.records[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiseaseRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a DiseaseRecord;
    type IntoIter = std::slice::Iter<'a, DiseaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
