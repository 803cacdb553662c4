//! Runtime contracts for analysis output.
//!
//! Debug-mode assertions that check every result list `analyze` hands back.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development and property tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                        | Property                                      |
//! |---------------------------------|-----------------------------------------------|
//! | `check_results_bounded`         | at most `MAX_RESULTS`, every number ≤ 100     |
//! | `check_results_sorted`          | raw scores non-increasing                     |
//! | `check_scores_floored`          | every reported raw score ≥ `MIN_REPORTED_SCORE` |
//! | `check_percentages_sum`         | percentages sum to 100 ± one per entry        |
//! | `check_matched_subsequence`     | matched symptoms are a subsequence of input   |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

// The floor has to be a valid, nonzero score.
const _: () = {
    assert!(MIN_REPORTED_SCORE > 0);
    assert!(MIN_REPORTED_SCORE <= MAX_SCORE);
    assert!(MAX_RESULTS > 0);
};

use crate::scoring::ranking::MAX_RESULTS;
use crate::scoring::{MAX_SCORE, MIN_REPORTED_SCORE};
use crate::types::{MatchResult, SymptomSet};

/// Run every result contract.
#[inline]
pub fn check_results_well_formed(results: &[MatchResult], input: &SymptomSet) {
    check_results_bounded(results);
    check_results_sorted(results);
    check_scores_floored(results);
    check_percentages_sum(results);
    for result in results {
        check_matched_subsequence(&result.matched_symptoms, input);
    }
}

#[inline]
pub fn check_results_bounded(results: &[MatchResult]) {
    debug_assert!(
        results.len() <= MAX_RESULTS,
        "Contract violation: {} results > MAX_RESULTS {}",
        results.len(),
        MAX_RESULTS
    );
    for r in results {
        debug_assert!(
            r.raw_score <= MAX_SCORE && r.percentage <= MAX_SCORE,
            "Contract violation: '{}' out of range (raw {}, percentage {})",
            r.disease,
            r.raw_score,
            r.percentage
        );
    }
}

#[inline]
pub fn check_results_sorted(results: &[MatchResult]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            pair[0].raw_score >= pair[1].raw_score,
            "Contract violation: results not sorted at position {} ({} < {})",
            i,
            pair[0].raw_score,
            pair[1].raw_score
        );
    }
}

#[inline]
pub fn check_scores_floored(results: &[MatchResult]) {
    for r in results {
        debug_assert!(
            r.raw_score >= MIN_REPORTED_SCORE,
            "Contract violation: '{}' reported with raw score {} below floor {}",
            r.disease,
            r.raw_score,
            MIN_REPORTED_SCORE
        );
    }
}

#[inline]
pub fn check_percentages_sum(results: &[MatchResult]) {
    if results.is_empty() {
        return;
    }
    let sum: i64 = results.iter().map(|r| i64::from(r.percentage)).sum();
    let slack = results.len() as i64;
    debug_assert!(
        (sum - 100).abs() <= slack,
        "Contract violation: percentages sum to {} (allowed 100 ± {})",
        sum,
        slack
    );
}

/// `matched` must appear in `input` in the same relative order.
#[inline]
pub fn check_matched_subsequence(matched: &[String], input: &SymptomSet) {
    debug_assert!(
        is_subsequence(matched, input.as_slice()),
        "Contract violation: matched symptoms {:?} not a subsequence of input {:?}",
        matched,
        input.as_slice()
    );
}

pub fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}
