//! Use Case Implementations

/// Aggregated search use case
pub mod search_service;

pub use search_service::SearchServiceImpl;
