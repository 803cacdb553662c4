// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Free text in, ranked diseases out.
//!
//! `analyze` is the whole matcher in one pure function:
//!
//! 1. normalize the text into a [`SymptomSet`] (empty → no results)
//! 2. score every disease in knowledge base order, keep the nonzero ones,
//!    floor them at [`crate::MIN_REPORTED_SCORE`]
//! 3. stable sort by score, cut to the top five, normalize to percentages
//!
//! It never fails. Nonsense input and empty input both produce an empty
//! vector, which the caller renders as a neutral "nothing found" state.

use crate::contracts::check_results_well_formed;
use crate::knowledge::KnowledgeBase;
use crate::scoring::ranking::rank;
use crate::scoring::{floor_score, matched_symptoms, score};
use crate::types::{MatchResult, SymptomSet};
use crate::utils::normalize;

/// Analyze free-text symptoms against a knowledge base.
///
/// Returns at most [`crate::MAX_RESULTS`] results, highest score first, with
/// percentages that sum to roughly 100.
///
/// # Example
///
/// ```
/// use symcheck::{analyze, KnowledgeBase};
///
/// let kb = KnowledgeBase::builtin();
/// let results = analyze("runny nose, sneezing", &kb);
/// assert_eq!(results[0].disease, "allergic rhinitis");
/// assert_eq!(results[1].disease, "common cold");
/// assert!(analyze("", &kb).is_empty());
/// ```
pub fn analyze(raw: &str, kb: &KnowledgeBase) -> Vec<MatchResult> {
    let symptoms = normalize(raw);
    analyze_symptoms(&symptoms, kb)
}

/// Same as [`analyze`], for input that's already been normalized.
pub fn analyze_symptoms(symptoms: &SymptomSet, kb: &KnowledgeBase) -> Vec<MatchResult> {
    if symptoms.is_empty() {
        return Vec::new();
    }

    let scored: Vec<MatchResult> = kb
        .iter()
        .filter_map(|disease| {
            let raw = score(symptoms, disease);
            if raw == 0 {
                return None;
            }
            let floored = floor_score(raw);
            Some(MatchResult {
                disease: disease.name.clone(),
                description: disease.description.clone(),
                raw_score: floored,
                percentage: floored,
                matched_symptoms: matched_symptoms(symptoms, disease),
            })
        })
        .collect();

    let candidates = scored.len();
    let results = rank(scored);
    check_results_well_formed(&results, symptoms);

    tracing::debug!(
        symptoms = symptoms.len(),
        candidates,
        reported = results.len(),
        "analyzed symptoms"
    );
    results
}
