//! # DevHub Domain Layer
//!
//! Core types and business rules for the DevHub community platform search.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Stored records (users, repositories, tools, ideas, resources, news, events) |
//! | [`value_objects`] | Search query, text patterns and the unified search result |
//! | [`ranking`] | Result ordering and truncation policy |
//! | [`ports`] | Contracts implemented by providers and infrastructure |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Result caps and user-facing messages |
//!
//! The domain layer has no knowledge of HTTP, configuration or concrete
//! storage backends.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod ranking;
pub mod value_objects;

pub use error::{Error, Result};
