// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recent searches: a bounded, most-recent-first log persisted as JSON.
//!
//! The matcher doesn't know this exists. The host records each analysis here
//! after the fact (input text, timestamp, result count), and saving is
//! best-effort: a full disk or a read-only data directory must never stop a
//! symptom check from returning its results.
//!
//! The file is a plain JSON array, newest first:
//!
//! ```json
//! [{"symptoms": "fever, cough", "timestamp": "2026-10-17T09:30:00.000Z", "results": 3}]
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// How many searches the log keeps.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to create history directory: {0}")]
    DirCreation(std::io::Error),
    #[error("failed to write history file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to remove history file: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize history: {0}")]
    Serialization(serde_json::Error),
}

/// One past search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// The input text as typed, trimmed.
    pub symptoms: String,
    /// When the search ran.
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
    /// How many results it produced.
    pub results: usize,
}

impl SearchRecord {
    pub fn new(symptoms: &str, results: usize, timestamp: DateTime<Utc>) -> Self {
        SearchRecord {
            symptoms: symptoms.trim().to_string(),
            timestamp,
            results,
        }
    }
}

/// Bounded log of recent searches, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<SearchRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, keeping only the newest [`HISTORY_CAPACITY`].
    pub fn from_entries(entries: Vec<SearchRecord>) -> Self {
        let mut entries: VecDeque<SearchRecord> = entries.into();
        entries.truncate(HISTORY_CAPACITY);
        History { entries }
    }

    /// Record a search that just ran.
    pub fn record(&mut self, symptoms: &str, results: usize) -> &SearchRecord {
        self.push(SearchRecord::new(symptoms, results, Utc::now()))
    }

    /// Push a record to the front, dropping the oldest past capacity.
    pub fn push(&mut self, record: SearchRecord) -> &SearchRecord {
        self.entries.push_front(record);
        self.entries.truncate(HISTORY_CAPACITY);
        &self.entries[0]
    }

    /// The `index`-th most recent search, for "use again".
    pub fn get(&self, index: usize) -> Option<&SearchRecord> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<SearchRecord> {
        self.entries.iter().cloned().collect()
    }
}

/// JSON file that holds the history between runs.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: PathBuf) -> Self {
        HistoryStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored history.
    ///
    /// Missing, unreadable, or corrupt files all yield an empty history. The
    /// last two are logged: losing history is annoying, not fatal.
    pub fn load(&self) -> History {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return History::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read history");
                return History::new();
            }
        };
        match serde_json::from_str::<Vec<SearchRecord>>(&raw) {
            Ok(entries) => History::from_entries(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt history");
                History::new()
            }
        }
    }

    pub fn save(&self, history: &History) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(HistoryError::DirCreation)?;
            }
        }
        let json =
            serde_json::to_string_pretty(&history.to_vec()).map_err(HistoryError::Serialization)?;
        std::fs::write(&self.path, json).map_err(HistoryError::FileWrite)
    }

    /// Load, record one search, save. Save failures are logged and swallowed.
    pub fn record_best_effort(&self, symptoms: &str, results: usize) -> History {
        let mut history = self.load();
        history.record(symptoms, results);
        if let Err(e) = self.save(&history) {
            tracing::warn!(path = %self.path.display(), error = %e, "skipping history save");
        }
        history
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HistoryError::FileRemove(e)),
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
mod iso8601 {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
