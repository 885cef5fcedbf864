//! # Schedcast Store
//!
//! Whole-file JSON persistence for the schedule document plus the
//! [`ScheduleManager`](manager::ScheduleManager) that editing collaborators
//! (the settings form, the HTTP surface) are programmed against.
//!
//! Persistence is deliberately simple: one UTF-8 file, read permissively
//! and overwritten wholesale on save. There is no partial patching and no
//! locking against external writers; a single human operator owns the file.

pub mod manager;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use schedcast_core::errors::{ScheduleError, ScheduleResult};
use schedcast_core::models::ScheduleDocument;
use schedcast_core::normalize;

pub use manager::ScheduleManager;

/// Default document path, relative to the working directory the renderer
/// and the editor share.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the document path.
pub const CONFIG_PATH_VAR: &str = "SCHEDCAST_CONFIG";

pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `SCHEDCAST_CONFIG`, or `config.json` when unset.
    pub fn from_env() -> Self {
        let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, substituting the default document when the file
    /// is missing, unreadable, or not a valid JSON object.
    pub fn load(&self) -> ScheduleDocument {
        match self.try_load() {
            Ok(doc) => doc,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "could not load schedule document, using defaults"
                );
                ScheduleDocument::default()
            }
        }
    }

    fn try_load(&self) -> ScheduleResult<ScheduleDocument> {
        let text = fs::read_to_string(&self.path)?;
        let raw: Value = serde_json::from_str(&text)
            .map_err(|err| ScheduleError::MalformedDocument(err.to_string()))?;
        let doc = normalize::normalize(raw)?;
        info!(path = %self.path.display(), "loaded schedule document");
        Ok(doc)
    }

    /// Writes the whole document as pretty-printed JSON, replacing any
    /// previous contents.
    pub fn save(&self, doc: &ScheduleDocument) -> ScheduleResult<()> {
        let text = serde_json::to_string_pretty(doc)
            .map_err(|err| ScheduleError::Internal(eyre::eyre!(err)))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
