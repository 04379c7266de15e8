//! Search Service Use Case
//!
//! Fans a query out to every collection of the document store, normalizes
//! the matches and applies the ranking policy.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use devhub_domain::constants::{SEARCH_MAX_RESULTS, SEARCH_PER_TYPE_LIMIT};
use devhub_domain::error::Result;
use devhub_domain::ports::providers::DocumentStoreProvider;
use devhub_domain::ranking::rank_and_truncate;
use devhub_domain::value_objects::{SearchEntity, SearchQuery, SearchResult};
use tracing::{debug, warn};

use crate::ports::services::SearchServiceInterface;

/// Search service implementation over a document store
pub struct SearchServiceImpl {
    store: Arc<dyn DocumentStoreProvider>,
    per_type_limit: usize,
    max_results: usize,
}

impl SearchServiceImpl {
    /// Create a search service with the default caps
    pub fn new(store: Arc<dyn DocumentStoreProvider>) -> Self {
        Self {
            store,
            per_type_limit: SEARCH_PER_TYPE_LIMIT,
            max_results: SEARCH_MAX_RESULTS,
        }
    }

    /// Override the per-collection cap
    pub fn with_per_type_limit(mut self, limit: usize) -> Self {
        self.per_type_limit = limit;
        self
    }

    /// Override the response cap
    pub fn with_max_results(mut self, limit: usize) -> Self {
        self.max_results = limit;
        self
    }

    /// Name of the underlying document store
    pub fn store_name(&self) -> &str {
        self.store.provider_name()
    }

    /// Run all seven lookups concurrently and merge them in fixed order
    async fn fan_out(&self, query: &SearchQuery) -> Result<Vec<SearchEntity>> {
        let store = self.store.as_ref();
        let limit = self.per_type_limit;
        let user_patterns = [query.prefix().clone(), query.contains().clone()];
        let contains = query.contains();

        let (users, repos, tools, ideas, resources, news, events) = tokio::try_join!(
            store.find_users(&user_patterns, limit),
            store.find_repositories(contains, limit),
            store.find_store_items(contains, limit),
            store.find_ideas(contains, limit),
            store.find_resources(contains, limit),
            store.find_news(contains, limit),
            store.find_events(contains, limit),
        )?;

        let mut entities = Vec::with_capacity(limit * 7);
        entities.extend(users.into_iter().take(limit).map(SearchEntity::User));
        entities.extend(repos.into_iter().take(limit).map(SearchEntity::Repo));
        entities.extend(tools.into_iter().take(limit).map(SearchEntity::Tool));
        entities.extend(ideas.into_iter().take(limit).map(SearchEntity::Idea));
        entities.extend(
            resources
                .into_iter()
                .take(limit)
                .map(SearchEntity::Resource),
        );
        entities.extend(news.into_iter().take(limit).map(SearchEntity::News));
        entities.extend(events.into_iter().take(limit).map(SearchEntity::Event));
        Ok(entities)
    }
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let start = Instant::now();

        let entities = self.fan_out(query).await.inspect_err(|e| {
            warn!(
                query = query.text(),
                store = self.store.provider_name(),
                error = %e,
                "Search lookup failed"
            );
        })?;
        let matched = entities.len();

        let results: Vec<SearchResult> = entities
            .into_iter()
            .map(|entity| entity.into_result(query))
            .collect();
        let results = rank_and_truncate(results, self.max_results);

        debug!(
            query = query.text(),
            matched,
            returned = results.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Search completed"
        );
        Ok(results)
    }
}
