//! Unit tests for the domain error type

use devhub_domain::Error;

#[test]
fn test_invalid_argument_display() {
    let err = Error::invalid_argument("Search query is required");
    assert_eq!(
        err.to_string(),
        "Invalid argument: Search query is required"
    );
}

#[test]
fn test_client_error_classification() {
    assert!(Error::invalid_argument("bad").is_client_error());
    assert!(Error::authentication("no token").is_client_error());
    assert!(Error::not_found("user").is_client_error());

    assert!(!Error::database("connection reset").is_client_error());
    assert!(!Error::internal("boom").is_client_error());
    assert!(!Error::configuration("missing").is_client_error());
}

#[test]
fn test_error_with_source_keeps_source() {
    let io = std::io::Error::other("disk gone");
    let err = Error::io_with_source("read failed", io);

    let source = std::error::Error::source(&err).expect("source should be kept");
    assert_eq!(source.to_string(), "disk gone");
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
    let err: Error = parse.into();
    assert!(matches!(err, Error::Json { .. }));
}
