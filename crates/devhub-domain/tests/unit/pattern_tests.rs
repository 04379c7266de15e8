//! Unit tests for text patterns

use devhub_domain::value_objects::{MatchAnchor, TextPattern};

#[test]
fn test_prefix_pattern_is_anchored_and_case_insensitive() {
    let pattern = TextPattern::prefix("zen").expect("pattern should build");

    assert_eq!(pattern.anchor(), MatchAnchor::Prefix);
    assert!(pattern.is_match("ZenParser"));
    assert!(pattern.is_match("zENDESK"));
    assert!(!pattern.is_match("The Zen of Code"));
}

#[test]
fn test_contains_pattern_matches_anywhere() {
    let pattern = TextPattern::contains("ZEN").expect("pattern should build");

    assert_eq!(pattern.anchor(), MatchAnchor::Contains);
    assert!(pattern.is_match("The Zen of Code"));
    assert!(pattern.is_match("zen"));
    assert!(!pattern.is_match("Z e n"));
}

#[test]
fn test_metacharacters_match_literally() {
    let pattern = TextPattern::contains("c++").expect("pattern should build");
    assert!(pattern.is_match("Modern C++ guide"));
    assert!(!pattern.is_match("ccc"));

    let dot = TextPattern::prefix("a.b").expect("pattern should build");
    assert!(dot.is_match("a.b tools"));
    assert!(!dot.is_match("axb tools"));
}

#[test]
fn test_unbalanced_input_does_not_fail() {
    let pattern = TextPattern::contains("(foo[").expect("escaped input always compiles");
    assert!(pattern.is_match("bar (foo[ baz"));
    assert_eq!(pattern.text(), "(foo[");
}

#[test]
fn test_matches_opt() {
    let pattern = TextPattern::contains("co").expect("pattern should build");
    assert!(pattern.matches_opt(Some("Zen Co")));
    assert!(!pattern.matches_opt(None));
}

#[test]
fn test_pattern_equality_ignores_compiled_form() {
    let a = TextPattern::prefix("zen").expect("pattern should build");
    let b = TextPattern::prefix("zen").expect("pattern should build");
    let c = TextPattern::contains("zen").expect("pattern should build");

    assert_eq!(a, b);
    assert_ne!(a, c);
}
