//! Runtime configuration.
//!
//! Resolved once at startup and passed down. Library code never reads
//! environment variables; the CLI layer maps flags and `SYMCHECK_*` variables
//! into a [`CheckerConfig`] and everything else asks it for paths.

use crate::history::HistoryStore;
use crate::knowledge::{KnowledgeBase, KnowledgeError};
use crate::profile::FileProfileSource;
use crate::session::SessionStore;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = ".symcheck";
pub const HISTORY_FILE_NAME: &str = "recent_searches.json";
pub const SESSION_FILE_NAME: &str = "session.json";
pub const PROFILE_FILE_NAME: &str = "profile.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("data directory path is not a directory: {}", .0.display())]
    DataDirNotDirectory(PathBuf),
    #[error("knowledge base file does not exist: {}", .0.display())]
    MissingKnowledgeBase(PathBuf),
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

#[derive(Clone, Debug)]
pub struct CheckerConfig {
    data_dir: PathBuf,
    knowledge_base: Option<PathBuf>,
}

impl CheckerConfig {
    /// Validate paths up front. The data directory may not exist yet (it's
    /// created on first write) but must not be a regular file.
    pub fn new(data_dir: PathBuf, knowledge_base: Option<PathBuf>) -> Result<Self, ConfigError> {
        if data_dir.exists() && !data_dir.is_dir() {
            return Err(ConfigError::DataDirNotDirectory(data_dir));
        }
        if let Some(path) = &knowledge_base {
            if !path.is_file() {
                return Err(ConfigError::MissingKnowledgeBase(path.clone()));
            }
        }
        Ok(CheckerConfig {
            data_dir,
            knowledge_base,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn knowledge_base_path(&self) -> Option<&Path> {
        self.knowledge_base.as_deref()
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE_NAME)
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE_NAME)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILE_NAME)
    }

    /// The configured knowledge base file, or the built-in table.
    pub fn load_knowledge_base(&self) -> Result<KnowledgeBase, ConfigError> {
        match &self.knowledge_base {
            Some(path) => Ok(KnowledgeBase::from_json_file(path)?),
            None => Ok(KnowledgeBase::builtin()),
        }
    }

    pub fn history_store(&self) -> HistoryStore {
        HistoryStore::new(self.history_path())
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(self.session_path())
    }

    pub fn profile_source(&self) -> FileProfileSource {
        FileProfileSource::new(self.profile_path())
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            knowledge_base: None,
        }
    }
}
