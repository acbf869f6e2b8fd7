//! Card configuration file
//!
//! Implements the core `ConfigStore` trait on a pretty-printed JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use sunseeker_zone_card_core::types::CardConfig;
use sunseeker_zone_card_core::{CardError, CardResult, ConfigStore};

/// JSON file configuration store
pub struct JsonFileConfigStore {
    path: PathBuf,
}

impl JsonFileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the parent directory exists
    fn ensure_parent_dir(&self) -> CardResult<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir).map_err(|e| CardError::Storage(e.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl ConfigStore for JsonFileConfigStore {
    fn load(&self) -> CardResult<Option<CardConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| CardError::Storage(e.to_string()))?;
        let config: CardConfig = serde_json::from_str(&content)?;
        Ok(Some(config))
    }

    fn save(&self, config: &CardConfig) -> CardResult<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content).map_err(|e| CardError::Storage(e.to_string()))?;

        tracing::debug!("Saved card configuration to {}", self.path.display());
        Ok(())
    }
}
