//! Common symptom vocabulary for suggestions.
//!
//! This list is what the input prompt offers as one-click additions. It is not
//! used for matching; a symptom doesn't need to be in here to score.

use crate::utils::normalize_term;

/// Common symptoms, grouped respiratory, general, digestive, skin, neurological.
pub const COMMON_SYMPTOMS: &[&str] = &[
    // Respiratory
    "sore throat",
    "runny nose",
    "stuffy nose",
    "cough",
    "sneezing",
    "chest pain",
    "shortness of breath",
    "wheezing",
    "phlegm production",
    "loss of smell",
    // General
    "fever",
    "headache",
    "fatigue",
    "muscle aches",
    "chills",
    "sweating",
    "weakness",
    "dizziness",
    "nausea",
    "vomiting",
    // Digestive
    "stomach pain",
    "diarrhea",
    "constipation",
    "loss of appetite",
    "bloating",
    "heartburn",
    "abdominal cramps",
    // Skin
    "rash",
    "itching",
    "swelling",
    "hives",
    "dry skin",
    // Neurological
    "confusion",
    "memory problems",
    "difficulty concentrating",
    "mood changes",
    "sleep problems",
    "restlessness",
];

/// How many suggestions the prompt shows by default.
pub const DEFAULT_SUGGESTION_COUNT: usize = 12;

/// The first `limit` common symptoms.
pub fn common_symptoms(limit: usize) -> &'static [&'static str] {
    &COMMON_SYMPTOMS[..limit.min(COMMON_SYMPTOMS.len())]
}

/// Vocabulary entries containing `prefix` (case-insensitive), in list order.
///
/// An empty prefix behaves like [`common_symptoms`].
pub fn suggest(prefix: &str, limit: usize) -> Vec<&'static str> {
    let needle = normalize_term(prefix);
    COMMON_SYMPTOMS
        .iter()
        .copied()
        .filter(|symptom| symptom.contains(needle.as_str()))
        .take(limit)
        .collect()
}

/// Add a symptom to free text the way clicking a suggestion does.
///
/// Text that already mentions the symptom comes back unchanged. Blank text
/// becomes just the symptom. Anything else gets ", symptom" appended.
pub fn append_symptom(text: &str, symptom: &str) -> String {
    if text.contains(symptom) {
        return text.to_string();
    }
    if text.trim().is_empty() {
        return symptom.to_string();
    }
    format!("{}, {}", text, symptom)
}
