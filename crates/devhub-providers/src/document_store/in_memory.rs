//! In-memory document store provider implementation
//!
//! Stores each collection in a concurrent hash map. Data is not persisted
//! and is lost on restart; a seed file can be loaded at startup.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use devhub_domain::entities::{Event, Idea, NewsArticle, Repository, Resource, StoreItem, User};
use devhub_domain::error::Result;
use devhub_domain::ports::providers::DocumentStoreProvider;
use devhub_domain::value_objects::TextPattern;
use tracing::info;

use crate::document_store::SeedData;

/// One collection keyed by record id
///
/// Each record remembers the sequence number of its first insertion, so
/// lookups return matches in insertion order regardless of hash layout.
struct Collection<T> {
    records: DashMap<String, (u64, T)>,
    next_seq: AtomicU64,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Insert or replace; a replaced record keeps its original position
    fn upsert(&self, id: String, record: T) {
        match self.records.entry(id) {
            Entry::Occupied(mut entry) => entry.get_mut().1 = record,
            Entry::Vacant(entry) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entry.insert((seq, record));
            }
        }
    }

    fn find(&self, limit: usize, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let mut hits: Vec<(u64, T)> = self
            .records
            .iter()
            .filter(|entry| keep(&entry.value().1))
            .map(|entry| entry.value().clone())
            .collect();
        hits.sort_unstable_by_key(|(seq, _)| *seq);
        hits.into_iter().take(limit).map(|(_, record)| record).collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// In-memory document store provider
///
/// Useful for development, demos and tests where a real database is not
/// available.
pub struct InMemoryDocumentStore {
    users: Collection<User>,
    repositories: Collection<Repository>,
    store_items: Collection<StoreItem>,
    ideas: Collection<Idea>,
    resources: Collection<Resource>,
    news: Collection<NewsArticle>,
    events: Collection<Event>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: Collection::new(),
            repositories: Collection::new(),
            store_items: Collection::new(),
            ideas: Collection::new(),
            resources: Collection::new(),
            news: Collection::new(),
            events: Collection::new(),
        }
    }

    /// Create a store pre-populated with `seed`
    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();
        store.load(seed);
        store
    }

    /// Build a store from registry configuration, loading the seed file if set
    pub fn from_config(config: &DocumentStoreProviderConfig) -> Result<Self> {
        let Some(path) = config.seed_path.as_deref() else {
            return Ok(Self::new());
        };

        let seed = SeedData::from_file(path)?;
        info!(
            path = %path.display(),
            records = seed.len(),
            "Loaded document store seed"
        );
        Ok(Self::from_seed(seed))
    }

    /// Upsert every record of `seed`
    pub fn load(&self, seed: SeedData) {
        seed.users.into_iter().for_each(|r| self.insert_user(r));
        seed.repositories
            .into_iter()
            .for_each(|r| self.insert_repository(r));
        seed.store_items
            .into_iter()
            .for_each(|r| self.insert_store_item(r));
        seed.ideas.into_iter().for_each(|r| self.insert_idea(r));
        seed.resources
            .into_iter()
            .for_each(|r| self.insert_resource(r));
        seed.news.into_iter().for_each(|r| self.insert_news(r));
        seed.events.into_iter().for_each(|r| self.insert_event(r));
    }

    /// Insert or replace a user
    pub fn insert_user(&self, user: User) {
        self.users.upsert(user.id.clone(), user);
    }

    /// Insert or replace a repository
    pub fn insert_repository(&self, repository: Repository) {
        self.repositories.upsert(repository.id.clone(), repository);
    }

    /// Insert or replace a store item
    pub fn insert_store_item(&self, item: StoreItem) {
        self.store_items.upsert(item.id.clone(), item);
    }

    /// Insert or replace an idea
    pub fn insert_idea(&self, idea: Idea) {
        self.ideas.upsert(idea.id.clone(), idea);
    }

    /// Insert or replace a resource
    pub fn insert_resource(&self, resource: Resource) {
        self.resources.upsert(resource.id.clone(), resource);
    }

    /// Insert or replace a news article
    pub fn insert_news(&self, article: NewsArticle) {
        self.news.upsert(article.id.clone(), article);
    }

    /// Insert or replace an event
    pub fn insert_event(&self, event: Event) {
        self.events.upsert(event.id.clone(), event);
    }

    /// Total number of stored records
    pub fn len(&self) -> usize {
        self.users.len()
            + self.repositories.len()
            + self.store_items.len()
            + self.ideas.len()
            + self.resources.len()
            + self.news.len()
            + self.events.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStoreProvider for InMemoryDocumentStore {
    async fn find_users(&self, patterns: &[TextPattern], limit: usize) -> Result<Vec<User>> {
        Ok(self.users.find(limit, |user| {
            patterns.iter().any(|p| {
                p.is_match(&user.username) || p.matches_opt(user.display_name.as_deref())
            })
        }))
    }

    async fn find_repositories(
        &self,
        pattern: &TextPattern,
        limit: usize,
    ) -> Result<Vec<Repository>> {
        Ok(self.repositories.find(limit, |r| pattern.is_match(&r.name)))
    }

    async fn find_store_items(
        &self,
        pattern: &TextPattern,
        limit: usize,
    ) -> Result<Vec<StoreItem>> {
        Ok(self.store_items.find(limit, |t| pattern.is_match(&t.name)))
    }

    async fn find_ideas(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Idea>> {
        Ok(self.ideas.find(limit, |i| pattern.is_match(&i.title)))
    }

    async fn find_resources(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Resource>> {
        Ok(self.resources.find(limit, |r| pattern.is_match(&r.title)))
    }

    async fn find_news(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<NewsArticle>> {
        Ok(self.news.find(limit, |n| pattern.is_match(&n.title)))
    }

    async fn find_events(&self, pattern: &TextPattern, limit: usize) -> Result<Vec<Event>> {
        Ok(self.events.find(limit, |e| pattern.is_match(&e.title)))
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use devhub_application::ports::registry::{
    DOCUMENT_STORE_PROVIDERS, DocumentStoreProviderConfig, DocumentStoreProviderEntry,
};

/// Factory function for creating in-memory document store instances.
fn in_memory_document_store_factory(
    config: &DocumentStoreProviderConfig,
) -> std::result::Result<Arc<dyn DocumentStoreProvider>, String> {
    InMemoryDocumentStore::from_config(config)
        .map(|store| Arc::new(store) as Arc<dyn DocumentStoreProvider>)
        .map_err(|e| e.to_string())
}

#[linkme::distributed_slice(DOCUMENT_STORE_PROVIDERS)]
static MEMORY_PROVIDER: DocumentStoreProviderEntry = DocumentStoreProviderEntry {
    name: "memory",
    description: "In-memory document store (non-persistent, optional JSON seed)",
    factory: in_memory_document_store_factory,
};
