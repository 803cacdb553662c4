// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for user-supplied knowledge bases.
//!
//! Arbitrary tables either get rejected with a typed error or load and analyze
//! without panicking. Ties must come back in table order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use symcheck::{analyze, DiseaseRecord, KnowledgeBase, MAX_RESULTS};

/// Fuzz input: a small table plus some query text
#[derive(Debug, Arbitrary)]
struct TableInput {
    diseases: Vec<(String, Vec<String>)>,
    query: String,
}

fuzz_target!(|input: TableInput| {
    // Cap sizes to avoid timeouts
    if input.diseases.len() > 32 || input.diseases.iter().any(|(_, s)| s.len() > 16) {
        return;
    }

    let records = input
        .diseases
        .iter()
        .map(|(name, symptoms)| {
            let symptoms: Vec<&str> = symptoms.iter().map(String::as_str).collect();
            DiseaseRecord::new(name, &symptoms, "")
        })
        .collect();

    let Ok(kb) = KnowledgeBase::new(records) else {
        return;
    };

    let results = analyze(&input.query, &kb);
    assert!(results.len() <= MAX_RESULTS);

    let position = |name: &str| kb.iter().position(|d| d.name == name);
    for pair in results.windows(2) {
        assert!(pair[0].raw_score >= pair[1].raw_score);
        if pair[0].raw_score == pair[1].raw_score {
            assert!(position(&pair[0].disease) < position(&pair[1].disease));
        }
    }
});
