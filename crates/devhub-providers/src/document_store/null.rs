//! Null document store provider for testing
//!
//! Every lookup succeeds with no records.

use std::sync::Arc;

use async_trait::async_trait;
use devhub_domain::entities::{Event, Idea, NewsArticle, Repository, Resource, StoreItem, User};
use devhub_domain::error::Result;
use devhub_domain::ports::providers::DocumentStoreProvider;
use devhub_domain::value_objects::TextPattern;

/// Null document store provider
///
/// Useful for:
/// - Unit testing where stored data is irrelevant
/// - Running the server without any backing data
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDocumentStore;

impl NullDocumentStore {
    /// Create a new null document store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentStoreProvider for NullDocumentStore {
    async fn find_users(&self, _patterns: &[TextPattern], _limit: usize) -> Result<Vec<User>> {
        Ok(Vec::new())
    }

    async fn find_repositories(
        &self,
        _pattern: &TextPattern,
        _limit: usize,
    ) -> Result<Vec<Repository>> {
        Ok(Vec::new())
    }

    async fn find_store_items(
        &self,
        _pattern: &TextPattern,
        _limit: usize,
    ) -> Result<Vec<StoreItem>> {
        Ok(Vec::new())
    }

    async fn find_ideas(&self, _pattern: &TextPattern, _limit: usize) -> Result<Vec<Idea>> {
        Ok(Vec::new())
    }

    async fn find_resources(
        &self,
        _pattern: &TextPattern,
        _limit: usize,
    ) -> Result<Vec<Resource>> {
        Ok(Vec::new())
    }

    async fn find_news(&self, _pattern: &TextPattern, _limit: usize) -> Result<Vec<NewsArticle>> {
        Ok(Vec::new())
    }

    async fn find_events(&self, _pattern: &TextPattern, _limit: usize) -> Result<Vec<Event>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use devhub_application::ports::registry::{
    DOCUMENT_STORE_PROVIDERS, DocumentStoreProviderConfig, DocumentStoreProviderEntry,
};

/// Factory function for creating null document store instances.
fn null_document_store_factory(
    _config: &DocumentStoreProviderConfig,
) -> std::result::Result<Arc<dyn DocumentStoreProvider>, String> {
    Ok(Arc::new(NullDocumentStore::new()))
}

#[linkme::distributed_slice(DOCUMENT_STORE_PROVIDERS)]
static NULL_PROVIDER: DocumentStoreProviderEntry = DocumentStoreProviderEntry {
    name: "null",
    description: "Null document store (always empty)",
    factory: null_document_store_factory,
};
