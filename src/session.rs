// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explicit sessions: who's checking symptoms, passed by reference.
//!
//! There is no ambient "current user". A [`Session`] is created at login,
//! handed to whatever needs identity, and invalidated at logout. Anything
//! gated on authentication takes `&Session` and checks [`Session::is_active`].
//!
//! Sessions don't verify credentials. That belongs to whoever creates them.
//! The CLI persists its one local session with [`SessionStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("not logged in")]
    NotAuthenticated,
    #[error("user id cannot be empty")]
    EmptyUserId,
    #[error("failed to read session file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write session file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to remove session file: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to parse session file: {0}")]
    Parse(serde_json::Error),
    #[error("failed to serialize session: {0}")]
    Serialization(serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Active,
    LoggedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: String,
    email: String,
    started_at: DateTime<Utc>,
    state: SessionState,
}

impl Session {
    /// Open a session for an already-authenticated user.
    pub fn login(user_id: &str, email: &str) -> Result<Self, SessionError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(SessionError::EmptyUserId);
        }
        tracing::debug!(user_id, "session started");
        Ok(Session {
            user_id: user_id.to_string(),
            email: email.trim().to_string(),
            started_at: Utc::now(),
            state: SessionState::Active,
        })
    }

    /// Invalidate the session. Idempotent.
    pub fn logout(&mut self) {
        if self.state == SessionState::Active {
            tracing::debug!(user_id = %self.user_id, "session ended");
        }
        self.state = SessionState::LoggedOut;
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// The authenticated-user gate: `Ok` only while the session is active.
    pub fn require_active(&self) -> Result<&Self, SessionError> {
        if self.is_active() {
            Ok(self)
        } else {
            Err(SessionError::NotAuthenticated)
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> SessionState {
        self.state
    }
}

/// The CLI's single persisted session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        SessionStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current session. No file means nobody is logged in.
    pub fn load(&self) -> Result<Session, SessionError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SessionError::NotAuthenticated)
            }
            Err(e) => return Err(SessionError::FileRead(e)),
        };
        let session: Session = serde_json::from_str(&raw).map_err(SessionError::Parse)?;
        session.require_active()?;
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(SessionError::FileWrite)?;
            }
        }
        let json = serde_json::to_string_pretty(session).map_err(SessionError::Serialization)?;
        std::fs::write(&self.path, json).map_err(SessionError::FileWrite)
    }

    /// Log out and forget the session. Fine to call when nobody is logged in.
    pub fn clear(&self) -> Result<Option<Session>, SessionError> {
        let mut session = match self.load() {
            Ok(session) => session,
            Err(SessionError::NotAuthenticated) | Err(SessionError::Parse(_)) => {
                self.remove_file()?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        session.logout();
        self.remove_file()?;
        Ok(Some(session))
    }

    fn remove_file(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::FileRemove(e)),
        }
    }
}
