//! Settings manager

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use bugshot_core::{
    models::{Settings, SettingsUpdate},
    storage::SettingsStorage,
};

/// Settings manager error
#[derive(Debug, thiserror::Error)]
pub enum SettingsManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] bugshot_core::Error),
}

pub type Result<T> = std::result::Result<T, SettingsManagerError>;

/// Owns the persisted settings record and an in-memory cache of it. One
/// instance per process, injected into every handler that needs credentials.
pub struct SettingsManager {
    storage: SettingsStorage,
    settings: Arc<RwLock<Settings>>,
}

impl SettingsManager {
    /// Load settings from the given path. A missing or unreadable file is
    /// recovered with defaults and never surfaced to the caller.
    pub fn new(path: PathBuf) -> Self {
        let storage = SettingsStorage::new(path);

        let settings = match storage.load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    "Failed to load settings from {}, falling back to defaults: {}",
                    storage.path().display(),
                    e
                );
                Settings::default()
            }
        };

        Self {
            storage,
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Merge a partial update into the current record, persist it, and
    /// refresh the cache. Masked secret values in the update are ignored.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings> {
        let merged = self.get().await.merged_with(update);

        self.storage.save(&merged)?;

        {
            let mut current = self.settings.write().await;
            *current = merged.clone();
        }

        Ok(merged)
    }
}
