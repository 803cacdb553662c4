//! Hand-computed scores for representative inputs.

use crate::common::{assert_results_well_formed, builtin, common_cold_kb, names};
use symcheck::analyze;

#[test]
fn test_common_cold_worked_example() {
    // 2/6 → 33.3, 2/2 → 100, mean 66.7 → 67. Only disease, so 100%.
    let results = analyze("runny nose, sneezing", &common_cold_kb());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].disease, "common cold");
    assert_eq!(results[0].raw_score, 67);
    assert_eq!(results[0].percentage, 100);
    assert_eq!(results[0].matched_symptoms, vec!["runny nose", "sneezing"]);
}

#[test]
fn test_empty_input_yields_nothing() {
    assert!(analyze("", &builtin()).is_empty());
    assert!(analyze("   \n ,; .", &builtin()).is_empty());
}

#[test]
fn test_unrelated_input_yields_nothing() {
    assert!(analyze("purple elephant noises", &builtin()).is_empty());
}

#[test]
fn test_allergy_signature() {
    let results = analyze("SNEEZING; Watery Eyes. itching", &builtin());
    assert_eq!(names(&results), vec!["allergic rhinitis", "common cold"]);
    // 3/5 and 3/3 → 80; 1/6 and 1/3 → 25
    assert_eq!(results[0].raw_score, 80);
    assert_eq!(results[1].raw_score, 25);
    assert_eq!(results[0].percentage, 76);
    assert_eq!(results[1].percentage, 24);
    assert_results_well_formed(&results);
}

#[test]
fn test_gastro_signature() {
    let results = analyze("nausea, vomiting, diarrhea", &builtin());
    assert_eq!(names(&results), vec!["gastroenteritis", "migraine"]);
    assert_eq!(results[0].raw_score, 75);
    assert_eq!(results[1].matched_symptoms, vec!["nausea"]);
}

#[test]
fn test_full_profile_scores_100() {
    let results = analyze(
        "headache, nausea, sensitivity to light, dizziness, fatigue",
        &builtin(),
    );
    assert_eq!(results[0].disease, "migraine");
    assert_eq!(results[0].raw_score, 100);
    assert_eq!(results[0].percentage, 41);
    assert_results_well_formed(&results);
}

#[test]
fn test_partial_word_matches_inside_reference() {
    // "ache" is a substring of "headache" and "mild headache"; the loose
    // predicate reports it exactly like "headache" would.
    let ache = analyze("ache", &builtin());
    let headache = analyze("headache", &builtin());
    assert_eq!(names(&ache), names(&headache));
    assert_eq!(ache[0].matched_symptoms, vec!["ache"]);
}

#[test]
fn test_longer_input_containing_reference_matches() {
    // "a bad cough at night" contains "cough"
    let results = analyze("a bad cough at night", &builtin());
    let found = names(&results);
    assert!(found.contains(&"bronchitis"));
    assert!(found.contains(&"influenza (flu)"));
    assert!(found.contains(&"covid-19"));
}
