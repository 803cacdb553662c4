//! The built-in disease table.
//!
//! Order matters: it's the tie-break order when two diseases score the same.

/// (name, reference symptoms, description)
pub(crate) const BUILTIN_DISEASES: &[(&str, &[&str], &str)] = &[
    (
        "common cold",
        &[
            "sore throat",
            "runny nose",
            "stuffy nose",
            "sneezing",
            "mild headache",
            "fatigue",
        ],
        "A viral upper respiratory tract infection",
    ),
    (
        "influenza (flu)",
        &[
            "fever",
            "headache",
            "muscle aches",
            "fatigue",
            "cough",
            "sore throat",
            "chills",
        ],
        "A viral infection that attacks the respiratory system",
    ),
    (
        "covid-19",
        &[
            "fever",
            "cough",
            "shortness of breath",
            "loss of smell",
            "fatigue",
            "headache",
            "sore throat",
        ],
        "Coronavirus disease caused by SARS-CoV-2",
    ),
    (
        "allergic rhinitis",
        &[
            "runny nose",
            "sneezing",
            "itching",
            "stuffy nose",
            "watery eyes",
        ],
        "Allergic reaction causing inflammation of the nasal passages",
    ),
    (
        "gastroenteritis",
        &[
            "nausea",
            "vomiting",
            "diarrhea",
            "stomach pain",
            "fever",
            "headache",
        ],
        "Inflammation of the stomach and intestines",
    ),
    (
        "migraine",
        &[
            "headache",
            "nausea",
            "sensitivity to light",
            "dizziness",
            "fatigue",
        ],
        "A neurological condition causing severe headaches",
    ),
    (
        "sinusitis",
        &[
            "stuffy nose",
            "sore throat",
            "headache",
            "facial pain",
            "loss of smell",
            "fatigue",
        ],
        "Inflammation of the sinuses",
    ),
    (
        "bronchitis",
        &[
            "cough",
            "phlegm production",
            "chest pain",
            "fatigue",
            "shortness of breath",
        ],
        "Inflammation of the bronchial tubes",
    ),
];
