//! Unit tests for domain entities

use devhub_domain::entities::{NewsArticle, Repository, User};

#[test]
fn test_user_shown_name_prefers_display_name() {
    let user = User::new("u1", "zendesk").with_display_name("Zen Co");
    assert_eq!(user.shown_name(), "Zen Co");
}

#[test]
fn test_user_shown_name_falls_back_to_username() {
    assert_eq!(User::new("u1", "alice").shown_name(), "alice");

    let empty = User::new("u2", "bob").with_display_name("");
    assert_eq!(empty.shown_name(), "bob");
}

#[test]
fn test_user_deserializes_store_id_and_camel_case() {
    let user: User = serde_json::from_str(
        r#"{"_id":"65f0","username":"alice","displayName":"Alice","avatarUrl":"/a.png"}"#,
    )
    .expect("user should deserialize");

    assert_eq!(user.id, "65f0");
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
    assert_eq!(user.avatar_url.as_deref(), Some("/a.png"));
}

#[test]
fn test_repository_optional_fields_default_to_none() {
    let repo: Repository =
        serde_json::from_str(r#"{"id":"r1","name":"ZenParser"}"#).expect("repo should deserialize");

    assert_eq!(repo, Repository::new("r1", "ZenParser"));
    assert!(repo.description.is_none());
    assert!(repo.submitted_by.is_none());
}

#[test]
fn test_repository_serializes_submitted_by_camel_case() {
    let repo = Repository::new("r1", "ZenParser").with_submitted_by("u1");
    let json = serde_json::to_value(&repo).expect("serialization should succeed");

    assert_eq!(json["submittedBy"], "u1");
    assert!(json.get("description").is_none());
}

#[test]
fn test_news_article_excerpt() {
    let article = NewsArticle::new("n1", "The Zen of Code").with_excerpt("Calm code");
    assert_eq!(article.excerpt.as_deref(), Some("Calm code"));
}
