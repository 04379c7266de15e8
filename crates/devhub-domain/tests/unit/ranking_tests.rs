//! Unit tests for the ranking policy

use devhub_domain::constants::SEARCH_MAX_RESULTS;
use devhub_domain::ranking::{rank, rank_and_truncate};
use devhub_domain::value_objects::{ResultType, SearchResult};

fn result(id: &str, result_type: ResultType, is_prefix_match: bool) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        title: id.to_string(),
        description: None,
        result_type,
        url: format!("/x/{id}"),
        is_prefix_match,
    }
}

fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_users_come_first() {
    let mut results = vec![
        result("repo", ResultType::Repo, true),
        result("user", ResultType::User, false),
    ];
    rank(&mut results);

    assert_eq!(ids(&results), ["user", "repo"]);
}

#[test]
fn test_prefix_matches_first_within_partition() {
    let mut results = vec![
        result("u-sub", ResultType::User, false),
        result("u-pre", ResultType::User, true),
        result("news-sub", ResultType::News, false),
        result("tool-pre", ResultType::Tool, true),
    ];
    rank(&mut results);

    assert_eq!(ids(&results), ["u-pre", "u-sub", "tool-pre", "news-sub"]);
}

#[test]
fn test_ties_keep_input_order() {
    let mut results = vec![
        result("repo-a", ResultType::Repo, false),
        result("idea-b", ResultType::Idea, true),
        result("event-c", ResultType::Event, false),
        result("news-d", ResultType::News, true),
        result("tool-e", ResultType::Tool, false),
    ];
    rank(&mut results);

    assert_eq!(
        ids(&results),
        ["idea-b", "news-d", "repo-a", "event-c", "tool-e"]
    );
}

#[test]
fn test_rank_and_truncate_to_max_results() {
    let results: Vec<_> = (0..25)
        .map(|i| result(&format!("r{i}"), ResultType::Repo, i % 2 == 0))
        .collect();
    let top = rank_and_truncate(results, SEARCH_MAX_RESULTS);

    assert_eq!(top.len(), SEARCH_MAX_RESULTS);
    assert!(top.iter().all(|r| r.is_prefix_match));
    assert_eq!(top[0].id, "r0");
    assert_eq!(top[9].id, "r18");
}

#[test]
fn test_rank_and_truncate_short_input() {
    let results = vec![result("only", ResultType::Event, false)];
    assert_eq!(rank_and_truncate(results, 10).len(), 1);
    assert!(rank_and_truncate(Vec::new(), 10).is_empty());
}

#[test]
fn test_ranking_is_idempotent() {
    let input = vec![
        result("n", ResultType::News, false),
        result("u", ResultType::User, false),
        result("r", ResultType::Repo, true),
    ];
    let once = rank_and_truncate(input.clone(), SEARCH_MAX_RESULTS);
    let twice = rank_and_truncate(once.clone(), SEARCH_MAX_RESULTS);

    assert_eq!(once, twice);
    assert_eq!(once, rank_and_truncate(input, SEARCH_MAX_RESULTS));
}
