//! Document Store Provider Registry
//!
//! Providers register themselves into [`DOCUMENT_STORE_PROVIDERS`] and are
//! resolved by the name configured under `store.provider`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use devhub_domain::ports::providers::DocumentStoreProvider;

/// Configuration for document store provider creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct DocumentStoreProviderConfig {
    /// Provider name (e.g., "memory", "null")
    pub provider: String,
    /// JSON file used to seed the store at startup
    pub seed_path: Option<PathBuf>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl DocumentStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the seed file
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for document store providers
pub struct DocumentStoreProviderEntry {
    /// Unique provider name (e.g., "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory:
        fn(&DocumentStoreProviderConfig) -> Result<Arc<dyn DocumentStoreProvider>, String>,
}

#[linkme::distributed_slice]
pub static DOCUMENT_STORE_PROVIDERS: [DocumentStoreProviderEntry] = [..];

/// Resolve document store provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn DocumentStoreProvider>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_document_store_provider(
    config: &DocumentStoreProviderConfig,
) -> Result<Arc<dyn DocumentStoreProvider>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = DOCUMENT_STORE_PROVIDERS
        .iter()
        .find(|entry| entry.name == provider_name)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = DOCUMENT_STORE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown document store provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered document store providers
///
/// Returns (name, description) tuples. Useful for CLI help.
pub fn list_document_store_providers() -> Vec<(&'static str, &'static str)> {
    DOCUMENT_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
