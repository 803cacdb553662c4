//! Ordering, truncation, and percentage normalization.

use crate::common::{assert_results_well_formed, builtin, make_kb, names, percentage_total};
use symcheck::{analyze, MAX_RESULTS, MIN_REPORTED_SCORE};

#[test]
fn test_truncates_to_five() {
    // Six diseases list a headache; covid-19 ties influenza at 57 and, coming
    // later in the table, is the one cut.
    let results = analyze("headache", &builtin());
    assert_eq!(results.len(), MAX_RESULTS);
    assert_eq!(
        names(&results),
        vec![
            "migraine",
            "common cold",
            "gastroenteritis",
            "sinusitis",
            "influenza (flu)"
        ]
    );
}

#[test]
fn test_ties_keep_table_order() {
    let kb = make_kb(&[
        ("zeta", &["itch"]),
        ("alpha", &["itch"]),
        ("mid", &["itch"]),
    ]);
    let results = analyze("itch", &kb);
    assert_eq!(names(&results), vec!["zeta", "alpha", "mid"]);
    assert!(results.iter().all(|r| r.raw_score == 100));
}

#[test]
fn test_ties_after_reordered_table() {
    let kb = make_kb(&[
        ("mid", &["itch"]),
        ("zeta", &["itch"]),
        ("alpha", &["itch"]),
    ]);
    assert_eq!(names(&analyze("itch", &kb)), vec!["mid", "zeta", "alpha"]);
}

#[test]
fn test_percentages_of_three_way_tie() {
    // 100/300 → 33.3 each; rounding leaves the sum one short.
    let kb = make_kb(&[("a", &["x"]), ("b", &["x"]), ("c", &["x"])]);
    let results = analyze("x", &kb);
    assert!(results.iter().all(|r| r.percentage == 33));
    assert_eq!(percentage_total(&results), 99);
}

#[test]
fn test_percentages_of_fever() {
    let results = analyze("fever", &builtin());
    assert_eq!(
        names(&results),
        vec!["gastroenteritis", "influenza (flu)", "covid-19"]
    );
    let pcts: Vec<u8> = results.iter().map(|r| r.percentage).collect();
    assert_eq!(pcts, vec![34, 33, 33]);
}

#[test]
fn test_percentages_use_kept_results_only() {
    // Shares are of the five kept scores (60+58+58+58+57 = 291), not of all six.
    let results = analyze("headache", &builtin());
    let pcts: Vec<u8> = results.iter().map(|r| r.percentage).collect();
    assert_eq!(pcts, vec![21, 20, 20, 20, 20]);
    assert_eq!(percentage_total(&results), 101);
}

#[test]
fn test_small_scores_are_floored() {
    // One hit against 40 references from 40 inputs: (2.5 + 2.5) / 2 → 3 → 5.
    let refs: Vec<String> = (0..40).map(|i| format!("ref{:02}", i)).collect();
    let ref_strs: Vec<&str> = refs.iter().map(String::as_str).collect();
    let kb = make_kb(&[("sprawl", ref_strs.as_slice())]);
    let mut inputs: Vec<String> = (0..39).map(|i| format!("zz{}", i)).collect();
    inputs.push("ref07".to_string());
    let results = analyze(&inputs.join(", "), &kb);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].raw_score, MIN_REPORTED_SCORE);
    assert_eq!(results[0].percentage, 100);
}

#[test]
fn test_mixed_input_ranks_best_explanation_first() {
    let results = analyze("cough, chest pain", &builtin());
    assert_eq!(
        names(&results),
        vec!["bronchitis", "influenza (flu)", "covid-19"]
    );
    assert_eq!(results[0].raw_score, 70);
    assert_results_well_formed(&results);
}
