//! Settings storage operations

use crate::{models::Settings, Result};
use std::path::{Path, PathBuf};

/// Reads and writes the settings file wholesale. The path is injected so
/// callers (and tests) decide where the record lives.
pub struct SettingsStorage {
    path: PathBuf,
}

impl SettingsStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record. A missing or empty file yields defaults;
    /// a corrupt file surfaces as an error for the caller to recover from.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }
}
