//! Composition root
//!
//! Resolves the configured document store from the linkme registry and
//! wires it into the search service together with the token verifier.
//!
//! ```text
//! AppConfig → registry (store.provider) → DocumentStoreProvider
//!                                              ↓
//!                                     SearchServiceImpl
//! AppConfig → auth.enabled → JwtTokenVerifier | NullTokenVerifier
//! ```

use std::sync::Arc;
use std::time::Duration;

use devhub_application::ports::registry::resolve_document_store_provider;
use devhub_application::ports::services::SearchServiceInterface;
use devhub_application::use_cases::SearchServiceImpl;
use devhub_domain::error::{Error, Result};
use devhub_domain::ports::infrastructure::TokenVerifier;
use devhub_domain::ports::providers::DocumentStoreProvider;
use tracing::info;

use crate::auth::token_verifier_from_config;
use crate::config::AppConfig;
use crate::utils::TimedOperation;

/// Application context shared by every request
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    store: Arc<dyn DocumentStoreProvider>,
    search_service: Arc<dyn SearchServiceInterface>,
    token_verifier: Arc<dyn TokenVerifier>,
    started: TimedOperation,
}

impl AppContext {
    /// Assemble a context from already-built parts
    pub fn from_parts(
        config: AppConfig,
        store: Arc<dyn DocumentStoreProvider>,
        token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        let search_service: Arc<dyn SearchServiceInterface> =
            Arc::new(SearchServiceImpl::new(Arc::clone(&store)));
        Self {
            config: Arc::new(config),
            store,
            search_service,
            token_verifier,
            started: TimedOperation::start(),
        }
    }

    /// Get the document store
    pub fn store(&self) -> Arc<dyn DocumentStoreProvider> {
        Arc::clone(&self.store)
    }

    /// Get the search service
    pub fn search(&self) -> Arc<dyn SearchServiceInterface> {
        Arc::clone(&self.search_service)
    }

    /// Get the token verifier
    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.token_verifier)
    }

    /// Time since the context was built
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let store = resolve_document_store_provider(&config.store.to_provider_config())
        .map_err(Error::configuration)?;
    info!(provider = store.provider_name(), "Resolved document store");

    let token_verifier = token_verifier_from_config(&config.auth);
    info!(enabled = token_verifier.is_enabled(), "Configured token verification");

    Ok(AppContext::from_parts(config, store, token_verifier))
}
