//! Persisted display preference (dark/light mode)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// On-disk shape: a single boolean under the fixed `darkMode` key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(rename = "darkMode", default)]
    dark_mode: bool,
}

/// Reads and writes the dark-mode flag in a small JSON file
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files mean light mode
    pub fn load_dark_mode(&self) -> bool {
        match self.read() {
            Ok(stored) => stored.dark_mode,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable preferences");
                false
            }
        }
    }

    fn read(&self) -> Result<StoredPreferences> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No saved preferences");
            return Ok(StoredPreferences::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_dark_mode(&self, dark_mode: bool) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::preferences(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let content = serde_json::to_string(&StoredPreferences { dark_mode })?;
        std::fs::write(&self.path, content).map_err(|e| {
            Error::preferences(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), dark_mode, "Saved preferences");
        Ok(())
    }
}
