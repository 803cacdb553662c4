// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rule-based triage: red-flag keywords and vital sign thresholds.
//!
//! This runs alongside the matcher, not inside it. The matcher says which
//! diseases fit; triage says how soon someone should be seen. Rules:
//!
//! | Rule                                   | Level      | Note                   |
//! |----------------------------------------|------------|------------------------|
//! | first red-flag keyword found in text   | `Urgent`   | `Red flag: <keyword>`  |
//! | SpO2 < 92                              | `Urgent`   | `Low SpO₂`             |
//! | temperature ≥ 39.0 °C                  | `Consult`+ | `High fever`           |
//! | heart rate ≥ 120 bpm                   | `Consult`+ | `High heart rate`      |
//!
//! `Consult`+ means "raise to at least Consult": it never downgrades an
//! earlier `Urgent`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Red-flag keywords, checked in order. Only the first hit is reported.
pub const RED_FLAGS: &[&str] = &[
    "chest pain",
    "one-sided weakness",
    "shortness of breath",
    "stiff neck",
];

pub const LOW_SPO2_THRESHOLD: u8 = 92;
pub const HIGH_FEVER_CELSIUS: f64 = 39.0;
pub const HIGH_HEART_RATE_BPM: u16 = 120;

pub const DISCLAIMER: &str = "This is not medical advice. Consult a clinician.";

/// How soon to seek care. Ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageLevel {
    SelfCare,
    Consult,
    Urgent,
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TriageLevel::SelfCare => "self care",
            TriageLevel::Consult => "consult",
            TriageLevel::Urgent => "urgent",
        };
        f.write_str(label)
    }
}

/// Optional vital signs supplied with the symptom text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Body temperature in °C.
    pub temp: Option<f64>,
    /// Heart rate in beats per minute.
    pub hr: Option<u16>,
    /// Blood oxygen saturation in percent.
    pub spo2: Option<u8>,
}

impl Vitals {
    /// Vitals rendered the way they get appended to the symptom text,
    /// e.g. `temp:38.5 hr:90`. Empty when nothing was measured.
    pub fn summary(&self) -> String {
        let mut bits = Vec::new();
        if let Some(temp) = self.temp {
            bits.push(format!("temp:{}", temp));
        }
        if let Some(hr) = self.hr {
            bits.push(format!("hr:{}", hr));
        }
        if let Some(spo2) = self.spo2 {
            bits.push(format!("spo2:{}", spo2));
        }
        bits.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageAssessment {
    pub level: TriageLevel,
    pub notes: Vec<String>,
    pub disclaimer: String,
}

/// Assess free text plus vitals.
pub fn assess(text: &str, vitals: &Vitals) -> TriageAssessment {
    let mut level = TriageLevel::SelfCare;
    let mut notes = Vec::new();
    let lowered = text.to_lowercase();

    if let Some(flag) = RED_FLAGS.iter().find(|kw| lowered.contains(*kw)) {
        level = TriageLevel::Urgent;
        notes.push(format!("Red flag: {}", flag));
    }

    if vitals.spo2.is_some_and(|spo2| spo2 < LOW_SPO2_THRESHOLD) {
        level = TriageLevel::Urgent;
        notes.push("Low SpO₂".to_string());
    }
    if vitals.temp.is_some_and(|temp| temp >= HIGH_FEVER_CELSIUS) {
        level = level.max(TriageLevel::Consult);
        notes.push("High fever".to_string());
    }
    if vitals.hr.is_some_and(|hr| hr >= HIGH_HEART_RATE_BPM) {
        level = level.max(TriageLevel::Consult);
        notes.push("High heart rate".to_string());
    }

    TriageAssessment {
        level,
        notes,
        disclaimer: DISCLAIMER.to_string(),
    }
}
