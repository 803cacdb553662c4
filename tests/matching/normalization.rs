//! Input normalization as seen through `analyze`.

use crate::common::{builtin, names};
use symcheck::{analyze, normalize};

#[test]
fn test_case_does_not_matter() {
    let lower = analyze("runny nose, sneezing", &builtin());
    let upper = analyze("RUNNY NOSE, Sneezing", &builtin());
    assert_eq!(lower, upper);
}

#[test]
fn test_every_delimiter_splits() {
    let a = analyze("fever, cough, loss of smell", &builtin());
    let b = analyze("fever;cough.loss of smell", &builtin());
    let c = analyze("fever\ncough\nloss of smell", &builtin());
    assert_eq!(names(&a), names(&b));
    assert_eq!(names(&a), names(&c));
    assert_eq!(a[0].disease, "covid-19");
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let results = analyze("   fever   ,  cough  ", &builtin());
    let flu = results
        .iter()
        .find(|r| r.disease == "influenza (flu)")
        .expect("flu should match");
    assert_eq!(flu.matched_symptoms, vec!["fever", "cough"]);
}

#[test]
fn test_normalize_preserves_order_and_drops_empties() {
    let set = normalize("Chills,, ; Fever .\n\nCough");
    assert_eq!(set.as_slice(), &["chills", "fever", "cough"]);
}

#[test]
fn test_normalize_whitespace_only_is_empty() {
    assert!(normalize(" \t \n ").is_empty());
}
