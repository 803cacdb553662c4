// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The checker: a knowledge base behind an authentication gate.
//!
//! `analyze` itself is pure and ungated. `SymptomChecker` is what a host
//! actually calls: it refuses to run without an active [`Session`], pairs the
//! matches with a triage assessment, and reports the result count the history
//! log wants.

use crate::analyze::analyze_symptoms;
use crate::knowledge::KnowledgeBase;
use crate::session::{Session, SessionError};
use crate::triage::{assess, TriageAssessment, Vitals};
use crate::types::MatchResult;
use crate::utils::normalize;
use serde::Serialize;

/// Everything one check produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub predictions: Vec<MatchResult>,
    pub triage: TriageAssessment,
}

impl CheckReport {
    /// The count recorded in the history log.
    pub fn result_count(&self) -> usize {
        self.predictions.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymptomChecker {
    kb: KnowledgeBase,
}

impl SymptomChecker {
    pub fn new(kb: KnowledgeBase) -> Self {
        SymptomChecker { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Match symptoms for an authenticated user.
    ///
    /// `None` means the text held no symptoms (blank, or only delimiters):
    /// nothing was analyzed and nothing should be recorded. An inactive
    /// session is the only error.
    pub fn check(
        &self,
        session: &Session,
        text: &str,
        vitals: &Vitals,
    ) -> Result<Option<CheckReport>, SessionError> {
        session.require_active()?;
        let symptoms = normalize(text);
        if symptoms.is_empty() {
            return Ok(None);
        }
        let predictions = analyze_symptoms(&symptoms, &self.kb);
        let triage = assess(text, vitals);
        tracing::info!(
            user_id = session.user_id(),
            results = predictions.len(),
            triage = %triage.level,
            "symptom check complete"
        );
        Ok(Some(CheckReport {
            predictions,
            triage,
        }))
    }
}
