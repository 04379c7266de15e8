//! Application Service Port Interfaces
//!
//! Contracts implemented by application services and consumed by the
//! server layer.

use async_trait::async_trait;
use devhub_domain::error::Result;
use devhub_domain::value_objects::{SearchQuery, SearchResult};

// ============================================================================
// Search Service Interface
// ============================================================================

/// Aggregated Search Service Interface
///
/// Runs one query against every searchable collection and returns the
/// ranked, truncated union of the matches.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Search every collection for `query`
    ///
    /// Fails as a whole when any single collection lookup fails.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>>;
}
