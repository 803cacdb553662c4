// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! User profiles: fetched in one step, edited by merging an update.
//!
//! A [`ProfileSource`] either returns a complete [`UserProfile`] or a typed
//! [`ProfileError`]. There's no "loading" state and no polling for fields to
//! show up: required fields are non-optional in the type, so a record that
//! deserializes is a record that's complete.

use crate::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("not logged in")]
    NotAuthenticated,
    #[error("no profile for user {user_id}")]
    NotFound { user_id: String },
    #[error("stored profile belongs to {found}, not {expected}")]
    UserMismatch { expected: String, found: String },
    #[error("profile record is incomplete or malformed: {0}")]
    Incomplete(serde_json::Error),
    #[error("failed to read profile file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write profile file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize profile: {0}")]
    Serialization(serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl UserProfile {
    /// A fresh, unverified, active profile for a session's user.
    pub fn for_session(session: &Session) -> Self {
        UserProfile {
            id: session.user_id().to_string(),
            email: session.email().to_string(),
            is_verified: false,
            is_active: true,
            created_at: Utc::now(),
            first_name: None,
            last_name: None,
            phone: None,
            address: None,
            city: None,
        }
    }

    /// First name if set, else the full name, else the email.
    pub fn display_name(&self) -> &str {
        if let Some(first) = self.first_name.as_deref() {
            return first;
        }
        self.last_name.as_deref().unwrap_or(&self.email)
    }

    /// "First Last", skipping whichever is missing. Empty when neither is set.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Merge an edit into the profile. Returns whether anything changed.
    pub fn apply(&mut self, update: &ProfileUpdate) -> bool {
        let before = self.clone();
        merge_field(&mut self.first_name, &update.first_name);
        merge_field(&mut self.last_name, &update.last_name);
        merge_field(&mut self.phone, &update.phone);
        merge_field(&mut self.address, &update.address);
        merge_field(&mut self.city, &update.city);
        *self != before
    }
}

/// `None` keeps the current value; `Some("")` (after trimming) clears it.
fn merge_field(current: &mut Option<String>, update: &Option<String>) {
    if let Some(value) = update {
        let value = value.trim();
        *current = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }
}

/// The editable subset of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ProfileUpdate::default()
    }
}

/// Where profiles come from.
pub trait ProfileSource {
    /// Fetch the complete profile for the session's user.
    fn fetch(&self, session: &Session) -> Result<UserProfile, ProfileError>;

    /// Persist an edited profile.
    fn store(&self, session: &Session, profile: &UserProfile) -> Result<(), ProfileError>;

    /// Fetch, merge, store. Returns the updated profile.
    fn update(
        &self,
        session: &Session,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ProfileError> {
        let mut profile = self.fetch(session)?;
        if profile.apply(update) {
            self.store(session, &profile)?;
            tracing::info!(user_id = %profile.id, "profile updated");
        }
        Ok(profile)
    }
}

/// Profile stored as a JSON file, one user per file.
#[derive(Debug, Clone)]
pub struct FileProfileSource {
    path: PathBuf,
}

impl FileProfileSource {
    pub fn new(path: PathBuf) -> Self {
        FileProfileSource { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch the profile, creating a fresh one on first use.
    ///
    /// The file holds one user. Logging in as someone else replaces it.
    pub fn fetch_or_create(&self, session: &Session) -> Result<UserProfile, ProfileError> {
        match self.fetch(session) {
            Err(ProfileError::NotFound { .. }) | Err(ProfileError::UserMismatch { .. }) => {
                let profile = UserProfile::for_session(session);
                self.store(session, &profile)?;
                Ok(profile)
            }
            other => other,
        }
    }
}

impl ProfileSource for FileProfileSource {
    fn fetch(&self, session: &Session) -> Result<UserProfile, ProfileError> {
        if !session.is_active() {
            return Err(ProfileError::NotAuthenticated);
        }
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProfileError::NotFound {
                    user_id: session.user_id().to_string(),
                })
            }
            Err(e) => return Err(ProfileError::FileRead(e)),
        };
        let profile: UserProfile = serde_json::from_str(&raw).map_err(ProfileError::Incomplete)?;
        if profile.id != session.user_id() {
            return Err(ProfileError::UserMismatch {
                expected: session.user_id().to_string(),
                found: profile.id,
            });
        }
        Ok(profile)
    }

    fn store(&self, session: &Session, profile: &UserProfile) -> Result<(), ProfileError> {
        if !session.is_active() {
            return Err(ProfileError::NotAuthenticated);
        }
        if profile.id != session.user_id() {
            return Err(ProfileError::UserMismatch {
                expected: session.user_id().to_string(),
                found: profile.id.clone(),
            });
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(ProfileError::FileWrite)?;
            }
        }
        let json = serde_json::to_string_pretty(profile).map_err(ProfileError::Serialization)?;
        std::fs::write(&self.path, json).map_err(ProfileError::FileWrite)
    }
}
