// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a match score.
//!
//! A disease scores well when two things are true at once: the user's symptoms
//! cover a lot of the disease's profile, and the disease explains a lot of the
//! user's symptoms. The score is the mean of those two coverages, so a disease
//! that matches one symptom out of ten the user listed can't look like a sure
//! thing just because that one symptom is its only reference symptom.
//!
//! ```text
//! coverage_of_disease = matched / |reference| × 100
//! coverage_of_input   = matched / |input|     × 100
//! score               = round_half_up((coverage_of_disease + coverage_of_input) / 2)
//! ```
//!
//! All arithmetic is done on integers. The mean collapses to
//! `50·m·(r + n) / (r·n)`, which we round half-up exactly instead of trusting
//! floating point at the .5 boundary.
//!
//! # The predicate is loose on purpose (or by accident)
//!
//! Two symptoms match when either one contains the other as a substring. That
//! means "ache" matches "muscle aches" and "headache", and "pain" matches "chest
//! pain", "stomach pain", and "facial pain". No tokenization, no edit distance.
//! It's a known source of false positives and it's preserved as-is.

use crate::types::{DiseaseRecord, SymptomSet};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Any reported match shows at least this score, so nobody sees "1% flu".
pub const MIN_REPORTED_SCORE: u8 = 5;

/// Upper bound of every score and percentage.
pub const MAX_SCORE: u8 = 100;

/// Does one input symptom match one reference symptom?
///
/// Substring containment in either direction. Both sides must already be
/// lower-case; the knowledge base and [`crate::normalize`] take care of that.
#[inline]
pub fn symptom_matches(input: &str, reference: &str) -> bool {
    reference.contains(input) || input.contains(reference)
}

/// Does this input symptom match any of the disease's reference symptoms?
#[inline]
pub fn matches_disease(input: &str, disease: &DiseaseRecord) -> bool {
    disease
        .reference_symptoms
        .iter()
        .any(|reference| symptom_matches(input, reference))
}

/// The input symptoms that match this disease, in input order.
///
/// Each input entry appears at most once no matter how many reference symptoms
/// it hits. Duplicate input entries each appear.
pub fn matched_symptoms(symptoms: &SymptomSet, disease: &DiseaseRecord) -> Vec<String> {
    symptoms
        .iter()
        .filter(|symptom| matches_disease(symptom, disease))
        .cloned()
        .collect()
}

/// How many input entries match this disease.
pub fn matched_count(symptoms: &SymptomSet, disease: &DiseaseRecord) -> usize {
    symptoms
        .iter()
        .filter(|symptom| matches_disease(symptom, disease))
        .count()
}

/// Score a disease against the input: integer in `[0, 100]`.
///
/// Returns 0 when either side is empty. No symptoms is no evidence, not a
/// vacuous full match, and it keeps both divisions away from zero.
///
/// Matching is case-sensitive here: reference symptoms must be lower-case, as
/// [`DiseaseRecord::new`] and [`crate::KnowledgeBase`] leave them. A record
/// whose public fields were filled in by hand with upper-case text won't match.
pub fn score(symptoms: &SymptomSet, disease: &DiseaseRecord) -> u8 {
    if symptoms.is_empty() || disease.reference_symptoms.is_empty() {
        return 0;
    }
    coverage_score(
        matched_count(symptoms, disease),
        disease.reference_symptoms.len(),
        symptoms.len(),
    )
}

/// The coverage mean, from counts alone.
///
/// With duplicate input entries `matched` can exceed `reference_len`, pushing
/// coverage of the disease past 100%. The result is capped at 100.
pub fn coverage_score(matched: usize, reference_len: usize, input_len: usize) -> u8 {
    if matched == 0 || reference_len == 0 || input_len == 0 {
        return 0;
    }
    let m = matched as u64;
    let r = reference_len as u64;
    let n = input_len as u64;

    // round_half_up(50·m·(r+n) / (r·n)) == floor((100·m·(r+n) + r·n) / (2·r·n))
    let numerator = 100 * m * (r + n) + r * n;
    let denominator = 2 * r * n;
    (numerator / denominator).min(u64::from(MAX_SCORE)) as u8
}

/// Apply the reporting floor to a nonzero score.
///
/// Zero stays zero: the floor only lifts matches that exist.
#[inline]
pub fn floor_score(score: u8) -> u8 {
    if score == 0 {
        0
    } else {
        score.max(MIN_REPORTED_SCORE)
    }
}

/// Round `part / total × 100` half-up. Zero when `total` is zero.
pub fn share_percentage(part: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (200 * part + total) / (2 * total);
    rounded.min(u64::from(MAX_SCORE)) as u8
}
