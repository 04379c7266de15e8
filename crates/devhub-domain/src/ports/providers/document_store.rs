use async_trait::async_trait;

use crate::entities::{Event, Idea, NewsArticle, Repository, Resource, StoreItem, User};
use crate::error::Result;
use crate::value_objects::TextPattern;

/// Document Store Read Interface
///
/// Read-only view over the seven collections the search subsystem queries.
/// Each finder returns at most `limit` records in the store's natural
/// order. Collections are independent; implementations must not assume a
/// transaction spans more than one call.
///
/// # Example
///
/// ```ignore
/// use devhub_domain::ports::providers::DocumentStoreProvider;
/// use devhub_domain::value_objects::TextPattern;
///
/// let pattern = TextPattern::contains("zen")?;
/// let repos = store.find_repositories(&pattern, 5).await?;
/// ```
#[async_trait]
pub trait DocumentStoreProvider: Send + Sync {
    /// Users whose `username` or `display_name` matches any of `patterns`
    ///
    /// # Returns
    /// Ok(users) with at most `limit` entries, Error if the lookup failed
    async fn find_users(&self, patterns: &[TextPattern], limit: usize) -> Result<Vec<User>>;

    /// Repositories whose `name` matches `pattern`
    async fn find_repositories(
        &self,
        pattern: &TextPattern,
        limit: usize,
    ) -> Result<Vec<Repository>>;

    /// Store items whose `name` matches `pattern`
    async fn find_store_items(&self, pattern: &TextPattern, limit: usize)
    -> Result<Vec<StoreItem>>;

    /// Ideas whose `title` matches `pattern`
    async fn find_ideas(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Idea>>;

    /// Resources whose `title` matches `pattern`
    async fn find_resources(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Resource>>;

    /// News articles whose `title` matches `pattern`
    async fn find_news(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<NewsArticle>>;

    /// Events whose `title` matches `pattern`
    async fn find_events(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Event>>;

    /// Get the name/identifier of this provider (e.g., "memory", "null")
    fn provider_name(&self) -> &str;
}
