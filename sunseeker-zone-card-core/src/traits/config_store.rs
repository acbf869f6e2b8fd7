//! Configuration store abstract Trait

use std::sync::RwLock;

use crate::error::{CardError, CardResult};
use crate::types::CardConfig;

/// Configuration Store Trait
///
/// Receives a full replacement record on every change, never a diff.
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration
    ///
    /// # Returns
    /// * `Ok(Some(config))` - configuration exists
    /// * `Ok(None)` - nothing stored yet
    fn load(&self) -> CardResult<Option<CardConfig>>;

    /// Replace the stored configuration
    ///
    /// # Arguments
    /// * `config` - the complete configuration record
    fn save(&self, config: &CardConfig) -> CardResult<()>;
}

/// In-memory configuration store
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    config: RwLock<Option<CardConfig>>,
}

impl InMemoryConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CardConfig) -> Self {
        Self {
            config: RwLock::new(Some(config)),
        }
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load(&self) -> CardResult<Option<CardConfig>> {
        self.config
            .read()
            .map(|guard| guard.clone())
            .map_err(|e| CardError::Storage(e.to_string()))
    }

    fn save(&self, config: &CardConfig) -> CardResult<()> {
        let mut guard = self
            .config
            .write()
            .map_err(|e| CardError::Storage(e.to_string()))?;
        *guard = Some(config.clone());
        Ok(())
    }
}
