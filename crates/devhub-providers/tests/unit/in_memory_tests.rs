//! Tests for the in-memory document store

use devhub_domain::entities::{Event, Idea, NewsArticle, Repository, Resource, StoreItem, User};
use devhub_domain::ports::providers::DocumentStoreProvider;
use devhub_domain::value_objects::TextPattern;
use devhub_providers::document_store::InMemoryDocumentStore;

fn contains(text: &str) -> TextPattern {
    TextPattern::contains(text).expect("pattern should build")
}

fn prefix(text: &str) -> TextPattern {
    TextPattern::prefix(text).expect("pattern should build")
}

#[tokio::test]
async fn test_find_users_matches_username_or_display_name() {
    let store = InMemoryDocumentStore::new();
    store.insert_user(User::new("u1", "zendesk"));
    store.insert_user(User::new("u2", "bob").with_display_name("Zen Co"));
    store.insert_user(User::new("u3", "carol"));

    let users = store
        .find_users(&[prefix("zen"), contains("zen")], 5)
        .await
        .expect("lookup should succeed");

    let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, ["u1", "u2"]);
}

#[tokio::test]
async fn test_find_respects_limit_and_insertion_order() {
    let store = InMemoryDocumentStore::new();
    for i in 0..12 {
        store.insert_repository(Repository::new(format!("r{i}"), format!("parser-{i}")));
    }

    let repos = store
        .find_repositories(&contains("PARSER"), 5)
        .await
        .expect("lookup should succeed");

    let ids: Vec<&str> = repos.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r0", "r1", "r2", "r3", "r4"]);
}

#[tokio::test]
async fn test_upsert_keeps_position() {
    let store = InMemoryDocumentStore::new();
    store.insert_event(Event::new("e1", "Rust meetup"));
    store.insert_event(Event::new("e2", "Rust conf"));
    store.insert_event(Event::new("e1", "Rust meetup (moved)"));

    let events = store
        .find_events(&contains("rust"), 5)
        .await
        .expect("lookup should succeed");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Rust meetup (moved)");
    assert_eq!(events[1].id, "e2");
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_each_collection_matches_its_title_field() {
    let store = InMemoryDocumentStore::new();
    store.insert_store_item(StoreItem::new("t1", "Zen CLI").with_description("unrelated"));
    store.insert_idea(Idea::new("i1", "Zen garden").with_description("x"));
    store.insert_resource(Resource::new("res1", "Learning zen"));
    store.insert_news(NewsArticle::new("n1", "Other").with_excerpt("zen in excerpt only"));

    let pattern = contains("zen");
    assert_eq!(store.find_store_items(&pattern, 5).await.unwrap().len(), 1);
    assert_eq!(store.find_ideas(&pattern, 5).await.unwrap().len(), 1);
    assert_eq!(store.find_resources(&pattern, 5).await.unwrap().len(), 1);
    assert!(store.find_news(&pattern, 5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_query_metacharacters_are_literal() {
    let store = InMemoryDocumentStore::new();
    store.insert_repository(Repository::new("r1", "c++-utils"));
    store.insert_repository(Repository::new("r2", "cccc"));

    let repos = store
        .find_repositories(&contains("c++"), 5)
        .await
        .expect("lookup should succeed");

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].id, "r1");
}

#[test]
fn test_provider_name_and_empty() {
    let store = InMemoryDocumentStore::default();
    assert_eq!(store.provider_name(), "memory");
    assert!(store.is_empty());
}
