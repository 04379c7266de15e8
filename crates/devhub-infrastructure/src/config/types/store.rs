//! Document store configuration types

use std::path::PathBuf;

use devhub_application::ports::registry::DocumentStoreProviderConfig;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STORE_PROVIDER;

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Registered provider name ("memory", "null")
    pub provider: String,

    /// JSON seed file for providers that support it
    pub seed_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            seed_path: None,
        }
    }
}

impl StoreConfig {
    /// Registry configuration for resolving the provider
    pub fn to_provider_config(&self) -> DocumentStoreProviderConfig {
        let config = DocumentStoreProviderConfig::new(&self.provider);
        match &self.seed_path {
            Some(path) => config.with_seed_path(path),
            None => config,
        }
    }
}
