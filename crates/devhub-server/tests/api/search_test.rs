//! `GET /api/search` tests

use std::sync::Arc;

use devhub_domain::entities::Repository;
use devhub_providers::document_store::InMemoryDocumentStore;
use rocket::http::{ContentType, Header, Status};
use serde_json::Value;

use crate::test_utils::test_fixtures::{SpyStore, client_for, token_for, zen_store};

async fn get_json(client: &rocket::local::asynchronous::Client, uri: &str) -> (Status, Value) {
    let response = client.get(uri).dispatch().await;
    let status = response.status();
    let body: Value = response.into_json().await.expect("JSON body");
    (status, body)
}

#[rocket::async_test]
async fn test_missing_query_is_bad_request() {
    let store = Arc::new(SpyStore::new(zen_store()));
    let client = client_for(store.clone()).await;

    let (status, body) = get_json(&client, "/api/search").await;

    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["message"], "Search query is required");
    assert_eq!(store.calls(), 0);
}

#[rocket::async_test]
async fn test_blank_query_is_bad_request_without_store_access() {
    let store = Arc::new(SpyStore::new(zen_store()));
    let client = client_for(store.clone()).await;

    for uri in ["/api/search?q=", "/api/search?q=%20%20%20", "/api/search?q=%09"] {
        let (status, body) = get_json(&client, uri).await;
        assert_eq!(status, Status::BadRequest, "{uri}");
        assert_eq!(body["message"], "Search query is required");
    }
    assert_eq!(store.calls(), 0);
}

#[rocket::async_test]
async fn test_repeated_query_is_bad_request() {
    let store = Arc::new(SpyStore::new(zen_store()));
    let client = client_for(store.clone()).await;

    let (status, body) = get_json(&client, "/api/search?q=a&q=b").await;

    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["message"], "Search query is required");
    assert_eq!(store.calls(), 0);
}

#[rocket::async_test]
async fn test_overlong_query_is_bad_request() {
    let store = Arc::new(SpyStore::new(zen_store()));
    let client = client_for(store.clone()).await;

    let uri = format!("/api/search?q={}", "z".repeat(200_000));
    let (status, body) = get_json(&client, &uri).await;

    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["message"], "Search query is too long");
    assert_eq!(store.calls(), 0);
}

#[rocket::async_test]
async fn test_success_shape_and_field_names() {
    let client = client_for(Arc::new(zen_store())).await;

    let response = client.get("/api/search?q=zen").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));

    let body: Value = response.into_json().await.expect("JSON body");
    assert_eq!(body["success"], true);

    let first = &body["results"][0];
    assert_eq!(first["id"], "u1");
    assert_eq!(first["title"], "Zen Master");
    assert_eq!(first["description"], "@zenmaster");
    assert_eq!(first["type"], "user");
    assert_eq!(first["url"], "/dashboard/zenmaster");
    assert_eq!(first["isPrefixMatch"], true);
}

#[rocket::async_test]
async fn test_zen_ranking_order() {
    let client = client_for(Arc::new(zen_store())).await;

    let (status, body) = get_json(&client, "/api/search?q=zen").await;
    assert_eq!(status, Status::Ok);

    let ids: Vec<&str> = body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .filter_map(|r| r["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["u1", "r1", "n1", "r2"]);

    let tool = &body["results"][3];
    assert_eq!(tool["type"], "repo");
    assert_eq!(tool["isPrefixMatch"], false);
    assert!(tool.get("description").is_none());
}

#[rocket::async_test]
async fn test_query_is_trimmed_and_case_insensitive() {
    let client = client_for(Arc::new(zen_store())).await;

    let (status, body) = get_json(&client, "/api/search?q=%20%20ZEN-GARDEN%20").await;

    assert_eq!(status, Status::Ok);
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["url"], "/repos/r1");
}

#[rocket::async_test]
async fn test_regex_metacharacters_match_literally() {
    let store = InMemoryDocumentStore::new();
    store.insert_repository(Repository::new("r1", "c++ tools"));
    store.insert_repository(Repository::new("r2", "cpp tools"));
    let client = client_for(Arc::new(store)).await;

    let (status, body) = get_json(&client, "/api/search?q=c%2B%2B").await;

    assert_eq!(status, Status::Ok);
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "r1");
}

#[rocket::async_test]
async fn test_results_capped_at_ten() {
    let store = InMemoryDocumentStore::new();
    for i in 0..5 {
        store.insert_repository(Repository::new(format!("r{i}"), format!("zen repo {i}")));
        store.insert_idea(devhub_domain::entities::Idea::new(format!("i{i}"), "zen idea"));
        store.insert_event(devhub_domain::entities::Event::new(format!("e{i}"), "zen meetup"));
    }
    let client = client_for(Arc::new(store)).await;

    let (_, body) = get_json(&client, "/api/search?q=zen").await;

    assert_eq!(body["results"].as_array().expect("results array").len(), 10);
}

#[rocket::async_test]
async fn test_no_matches_returns_empty_list() {
    let client = client_for(Arc::new(zen_store())).await;

    let (status, body) = get_json(&client, "/api/search?q=nothing-here").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["success"], true);
    assert_eq!(body["results"], Value::Array(vec![]));
}

#[rocket::async_test]
async fn test_store_failure_is_generic_server_error() {
    let client = client_for(Arc::new(SpyStore::failing())).await;

    let (status, body) = get_json(&client, "/api/search?q=zen").await;

    assert_eq!(status, Status::InternalServerError);
    assert_eq!(body["message"], "Internal server error");
    assert!(!body.to_string().contains("mongodb"));
}

#[rocket::async_test]
async fn test_invalid_token_does_not_block_search() {
    let client = client_for(Arc::new(zen_store())).await;

    let response = client
        .get("/api/search?q=zen")
        .header(Header::new("Authorization", "Bearer not-a-jwt"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client
        .get("/api/search?q=zen")
        .header(Header::new(
            "Authorization",
            format!("Bearer {}", token_for("u1", 3600)),
        ))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}
