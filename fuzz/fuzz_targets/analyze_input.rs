// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for free-text analysis against the built-in table.
//!
//! Whatever the user types, `analyze` must return, and what it returns must
//! be well formed: at most five results, sorted, floored, percentages adding
//! up to about 100.

#![no_main]

use libfuzzer_sys::fuzz_target;
use symcheck::{analyze, KnowledgeBase, MAX_RESULTS, MIN_REPORTED_SCORE};

fuzz_target!(|data: &[u8]| {
    static KB: std::sync::OnceLock<KnowledgeBase> = std::sync::OnceLock::new();
    let kb = KB.get_or_init(KnowledgeBase::builtin);

    let text = String::from_utf8_lossy(data);
    let results = analyze(&text, kb);

    assert!(results.len() <= MAX_RESULTS);
    for pair in results.windows(2) {
        assert!(pair[0].raw_score >= pair[1].raw_score);
    }
    for r in &results {
        assert!(r.raw_score >= MIN_REPORTED_SCORE && r.raw_score <= 100);
        assert!(!r.matched_symptoms.is_empty());
    }
    if !results.is_empty() {
        let total: i64 = results.iter().map(|r| i64::from(r.percentage)).sum();
        assert!((total - 100).abs() <= results.len() as i64);
    }

    // Same text, same answer.
    assert_eq!(results, analyze(&text, kb));
});
