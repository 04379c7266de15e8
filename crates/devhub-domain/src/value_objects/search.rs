//! Search-Related Value Objects
//!
//! The unified result shape and the tagged union that normalizes each kind
//! of stored record into it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::{Event, Idea, NewsArticle, Repository, Resource, StoreItem, User};
use crate::value_objects::SearchQuery;

/// Collection a [`SearchResult`] was produced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    /// Platform user
    User,
    /// Showcased repository
    Repo,
    /// Tool store item
    Tool,
    /// Community idea
    Idea,
    /// Community resource
    Resource,
    /// News article
    News,
    /// Community event
    Event,
}

impl ResultType {
    /// Every result type, in fan-out merge order
    pub const ALL: [Self; 7] = [
        Self::User,
        Self::Repo,
        Self::Tool,
        Self::Idea,
        Self::Resource,
        Self::News,
        Self::Event,
    ];

    /// Wire name of the type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Repo => "repo",
            Self::Tool => "tool",
            Self::Idea => "idea",
            Self::Resource => "resource",
            Self::News => "news",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value Object: Unified Search Result
///
/// Every searchable record is reduced to this shape before ranking.
///
/// ## Business Rules
///
/// - `url` is a client-side route, never an API path
/// - a missing `description` is omitted from the JSON body
/// - `is_prefix_match` is computed against the trimmed query, ignoring case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Identifier of the underlying record
    pub id: String,
    /// Display title
    pub title: String,
    /// Optional short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Collection the record came from
    #[serde(rename = "type")]
    pub result_type: ResultType,
    /// Client route to the record
    pub url: String,
    /// Whether the title (or username) starts with the query
    pub is_prefix_match: bool,
}

/// Tagged union over every searchable entity
///
/// Each variant has exactly one normalization rule in
/// [`SearchEntity::into_result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEntity {
    /// Matched user
    User(User),
    /// Matched repository
    Repo(Repository),
    /// Matched store item
    Tool(StoreItem),
    /// Matched idea
    Idea(Idea),
    /// Matched resource
    Resource(Resource),
    /// Matched news article
    News(NewsArticle),
    /// Matched event
    Event(Event),
}

impl SearchEntity {
    /// Result type tag of this entity
    pub fn result_type(&self) -> ResultType {
        match self {
            Self::User(_) => ResultType::User,
            Self::Repo(_) => ResultType::Repo,
            Self::Tool(_) => ResultType::Tool,
            Self::Idea(_) => ResultType::Idea,
            Self::Resource(_) => ResultType::Resource,
            Self::News(_) => ResultType::News,
            Self::Event(_) => ResultType::Event,
        }
    }

    /// Normalize the entity into a [`SearchResult`] for `query`
    pub fn into_result(self, query: &SearchQuery) -> SearchResult {
        let result_type = self.result_type();
        match self {
            Self::User(user) => {
                let is_prefix_match = query.is_prefix_of(&user.username)
                    || user
                        .display_name
                        .as_deref()
                        .is_some_and(|name| query.is_prefix_of(name));
                SearchResult {
                    title: user.shown_name().to_owned(),
                    description: Some(format!("@{}", user.username)),
                    url: format!("/dashboard/{}", user.username),
                    id: user.id,
                    result_type,
                    is_prefix_match,
                }
            }
            Self::Repo(repo) => titled(
                query,
                result_type,
                format!("/repos/{}", repo.id),
                repo.id,
                repo.name,
                repo.description,
            ),
            Self::Tool(item) => titled(
                query,
                result_type,
                format!("/store/{}", item.id),
                item.id,
                item.name,
                item.description,
            ),
            Self::Idea(idea) => titled(
                query,
                result_type,
                format!("/community?tab=ideas&id={}", idea.id),
                idea.id,
                idea.title,
                idea.description,
            ),
            Self::Resource(resource) => titled(
                query,
                result_type,
                format!("/community?tab=resources&id={}", resource.id),
                resource.id,
                resource.title,
                resource.description,
            ),
            Self::News(article) => titled(
                query,
                result_type,
                format!("/news/{}", article.id),
                article.id,
                article.title,
                article.excerpt,
            ),
            Self::Event(event) => titled(
                query,
                result_type,
                format!("/events/{}", event.id),
                event.id,
                event.title,
                event.description,
            ),
        }
    }
}

fn titled(
    query: &SearchQuery,
    result_type: ResultType,
    url: String,
    id: String,
    title: String,
    description: Option<String>,
) -> SearchResult {
    SearchResult {
        is_prefix_match: query.is_prefix_of(&title),
        id,
        title,
        description,
        result_type,
        url,
    }
}

impl From<User> for SearchEntity {
    fn from(value: User) -> Self {
        Self::User(value)
    }
}

impl From<Repository> for SearchEntity {
    fn from(value: Repository) -> Self {
        Self::Repo(value)
    }
}

impl From<StoreItem> for SearchEntity {
    fn from(value: StoreItem) -> Self {
        Self::Tool(value)
    }
}

impl From<Idea> for SearchEntity {
    fn from(value: Idea) -> Self {
        Self::Idea(value)
    }
}

impl From<Resource> for SearchEntity {
    fn from(value: Resource) -> Self {
        Self::Resource(value)
    }
}

impl From<NewsArticle> for SearchEntity {
    fn from(value: NewsArticle) -> Self {
        Self::News(value)
    }
}

impl From<Event> for SearchEntity {
    fn from(value: Event) -> Self {
        Self::Event(value)
    }
}
