// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a symptom check.
//!
//! Three things flow through the matcher: the user's symptoms after normalization,
//! the disease records they get compared against, and the ranked results that come
//! out the other end. Nothing here is persisted; a `SymptomSet` and its
//! `MatchResult`s live for exactly one analysis.
//!
//! | Rust Type       | Lifetime         | Purpose                                  |
//! |-----------------|------------------|------------------------------------------|
//! | `SymptomSet`    | per analysis     | Normalized input, user's order preserved |
//! | `DiseaseRecord` | process lifetime | Immutable knowledge base entry           |
//! | `MatchResult`   | per analysis     | Ranked, normalized output row            |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SymptomSet**: every entry is lower-case, trimmed, and non-empty. An empty
//!   string would be a substring of every reference symptom and match everything.
//!
//! - **DiseaseRecord**: at least one reference symptom, each lower-case and
//!   non-empty. `KnowledgeBase::new` enforces this, so records you get out of a
//!   knowledge base can be trusted.
//!
//! - **MatchResult**: `raw_score` and `percentage` are in `[0, 100]`, and
//!   `matched_symptoms` is a subsequence of the input set.

use serde::{Deserialize, Serialize};

use crate::utils::normalize_term;

// =============================================================================
// INPUT
// =============================================================================

/// Normalized symptoms in the order the user typed them.
///
/// Duplicates are kept: "fever, fever" is two entries, and both count toward
/// the match. Build one with [`crate::normalize`]; the constructor is crate-private
/// so the lower-case/trimmed/non-empty invariant can't be bypassed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymptomSet(Vec<String>);

impl SymptomSet {
    pub(crate) fn from_normalized(symptoms: Vec<String>) -> Self {
        debug_assert!(
            symptoms.iter().all(|s| !s.is_empty() && s.trim() == s),
            "SymptomSet entries must be trimmed and non-empty"
        );
        SymptomSet(symptoms)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SymptomSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// KNOWLEDGE BASE ENTRIES
// =============================================================================

/// One disease and the symptoms that characterize it.
///
/// The JSON shape matches the knowledge base file format:
///
/// ```json
/// { "name": "migraine", "symptoms": ["headache", "nausea"], "description": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub name: String,
    #[serde(rename = "symptoms")]
    pub reference_symptoms: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl DiseaseRecord {
    /// Reference symptoms are trimmed and lower-cased on the way in.
    pub fn new(name: &str, reference_symptoms: &[&str], description: &str) -> Self {
        DiseaseRecord {
            name: name.to_string(),
            reference_symptoms: reference_symptoms
                .iter()
                .map(|s| normalize_term(s))
                .collect(),
            description: description.to_string(),
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// One row of the ranked output.
///
/// `raw_score` is the floored score used for ranking (never below
/// [`crate::MIN_REPORTED_SCORE`] for a reported match). `percentage` is the share of
/// the top results' combined score, so the percentages of one analysis sum to
/// roughly 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub disease: String,
    pub description: String,
    pub raw_score: u8,
    pub percentage: u8,
    pub matched_symptoms: Vec<String>,
}
