//! Utility functions for string processing.

use crate::types::SymptomSet;

/// Characters that separate one symptom from the next in free text.
pub const SYMPTOM_DELIMITERS: [char; 4] = [',', ';', '.', '\n'];

/// Normalize free text into a symptom set: lowercase, split, trim, drop empties.
///
/// - "Sore throat, RUNNY nose" → ["sore throat", "runny nose"]
/// - "fever;; chills.\n" → ["fever", "chills"]
/// - "   " → []
///
/// Order follows the input. The output never has more entries than the split
/// produced pieces, and an empty result means "nothing to analyze" rather than
/// an error.
pub fn normalize(raw: &str) -> SymptomSet {
    let symptoms = raw
        .to_lowercase()
        .split(SYMPTOM_DELIMITERS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();
    SymptomSet::from_normalized(symptoms)
}

/// Normalize a single reference string (a known symptom or search prefix).
///
/// Unlike [`normalize`], this does not split: "loss of smell" stays one term.
pub fn normalize_term(value: &str) -> String {
    value.trim().to_lowercase()
}
