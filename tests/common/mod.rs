//! Shared test utilities and fixtures.

#![allow(dead_code)]

use symcheck::{CheckerConfig, KnowledgeBase, MatchResult, Session};
use tempfile::TempDir;

// Re-export canonical test utilities from symcheck::testing
#[allow(unused_imports)]
pub use symcheck::testing::{common_cold_kb, make_disease, make_kb};

// ============================================================================
// KNOWLEDGE BASES
// ============================================================================

/// The built-in eight-disease table.
pub fn builtin() -> KnowledgeBase {
    KnowledgeBase::builtin()
}

/// Disease names in result order.
pub fn names(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.disease.as_str()).collect()
}

/// Sum of reported percentages.
pub fn percentage_total(results: &[MatchResult]) -> u32 {
    results.iter().map(|r| u32::from(r.percentage)).sum()
}

// ============================================================================
// STORAGE FIXTURES
// ============================================================================

/// A config rooted in a fresh temporary directory.
///
/// Keep the `TempDir` alive for as long as the config is used.
pub fn temp_config() -> (TempDir, CheckerConfig) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = CheckerConfig::new(dir.path().join("data"), None).expect("valid config");
    (dir, config)
}

/// An active session for a test user.
pub fn test_session() -> Session {
    Session::login("user-1", "pat@example.com").expect("valid login")
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Check the output invariants every `analyze` call must satisfy.
pub fn assert_results_well_formed(results: &[MatchResult]) {
    assert!(results.len() <= symcheck::MAX_RESULTS, "too many results");
    for pair in results.windows(2) {
        assert!(
            pair[0].raw_score >= pair[1].raw_score,
            "results not sorted: {} ({}) before {} ({})",
            pair[0].disease,
            pair[0].raw_score,
            pair[1].disease,
            pair[1].raw_score
        );
    }
    for r in results {
        assert!(r.raw_score >= symcheck::MIN_REPORTED_SCORE && r.raw_score <= 100);
        assert!(r.percentage <= 100);
        assert!(!r.matched_symptoms.is_empty(), "{} has no matched symptoms", r.disease);
    }
    if !results.is_empty() {
        let total = percentage_total(results) as i64;
        assert!(
            (total - 100).abs() <= results.len() as i64,
            "percentages sum to {}",
            total
        );
    }
}
