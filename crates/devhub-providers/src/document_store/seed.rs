//! Seed data for the in-memory document store
//!
//! A seed file is a single JSON object with one array per collection.
//! Missing collections are treated as empty.
//!
//! ```json
//! {
//!   "users": [{ "id": "u1", "username": "alice", "displayName": "Alice" }],
//!   "repositories": [{ "id": "r1", "name": "ZenParser" }],
//!   "storeItems": [],
//!   "news": [{ "_id": "n1", "title": "The Zen of Code", "excerpt": "..." }]
//! }
//! ```

use std::path::Path;

use devhub_domain::entities::{Event, Idea, NewsArticle, Repository, Resource, StoreItem, User};
use devhub_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Contents of a seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    /// Users collection
    pub users: Vec<User>,
    /// Repositories collection
    pub repositories: Vec<Repository>,
    /// Store items collection
    #[serde(alias = "tools")]
    pub store_items: Vec<StoreItem>,
    /// Ideas collection
    pub ideas: Vec<Idea>,
    /// Resources collection
    pub resources: Vec<Resource>,
    /// News collection
    pub news: Vec<NewsArticle>,
    /// Events collection
    pub events: Vec<Event>,
}

impl SeedData {
    /// Parse seed data from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a seed file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io_with_source(format!("Failed to read seed file {}", path.display()), e)
        })?;
        Self::from_json(&content)
    }

    /// Total number of records across all collections
    pub fn len(&self) -> usize {
        self.users.len()
            + self.repositories.len()
            + self.store_items.len()
            + self.ideas.len()
            + self.resources.len()
            + self.news.len()
            + self.events.len()
    }

    /// Whether every collection is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
