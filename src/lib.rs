// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Symptom checking by substring matching against a fixed disease table.
//!
//! Type free-text symptoms, get back up to five diseases ranked by how well
//! they fit, with percentages that add up to roughly 100. The matcher is a
//! pure function; history, sessions, profiles, and triage sit around it as
//! collaborators the host wires together.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│  scoring/    │────▶│  analyze.rs  │
//! │ (normalize) │     │ (score, rank)│     │  (analyze)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        ▲                   ▲                    │
//!        │            ┌──────────────┐            ▼
//!        │            │  knowledge/  │     ┌──────────────┐
//!        └────────────│ (diseases,   │     │  checker.rs  │◀── session.rs
//!                     │  vocabulary) │     │ (gate+triage)│
//!                     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//!                                          history.rs (best-effort log)
//! ```
//!
//! # Usage
//!
//! ```
//! use symcheck::{analyze, KnowledgeBase};
//!
//! let kb = KnowledgeBase::builtin();
//! let results = analyze("fever, cough, loss of smell", &kb);
//!
//! assert_eq!(results[0].disease, "covid-19");
//! assert!(results.len() <= 5);
//! ```
//!
//! # The predicate is loose
//!
//! An input symptom matches a reference symptom when either contains the
//! other. "pain" matches "chest pain" and "stomach pain" alike. That's the
//! behavior the rankings are built on; don't expect edit-distance smarts.

pub mod analyze;
pub mod checker;
pub mod config;
pub mod contracts;
pub mod history;
pub mod knowledge;
pub mod profile;
pub mod scoring;
pub mod session;
pub mod testing;
pub mod triage;
mod types;
mod utils;

// Re-exports for public API
pub use analyze::{analyze, analyze_symptoms};
pub use checker::{CheckReport, SymptomChecker};
pub use config::{CheckerConfig, ConfigError};
pub use history::{History, HistoryError, HistoryStore, SearchRecord, HISTORY_CAPACITY};
pub use knowledge::{
    append_symptom, common_symptoms, suggest, KnowledgeBase, KnowledgeError, COMMON_SYMPTOMS,
};
pub use profile::{FileProfileSource, ProfileError, ProfileSource, ProfileUpdate, UserProfile};
pub use scoring::ranking::{compare_results, MAX_RESULTS};
pub use scoring::{floor_score, score, symptom_matches, MIN_REPORTED_SCORE};
pub use session::{Session, SessionError, SessionStore};
pub use triage::{assess, TriageAssessment, TriageLevel, Vitals};
pub use types::{DiseaseRecord, MatchResult, SymptomSet};
pub use utils::{normalize, normalize_term};
