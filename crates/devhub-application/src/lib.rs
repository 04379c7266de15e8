//! Application Layer - DevHub
//!
//! Orchestrates the domain to answer search requests.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the search use case over the document store port
//! - Declares the provider registry that concrete stores register into
//! - Has no dependencies on infrastructure or HTTP frameworks
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `devhub-domain`: entities, value objects and ports
//! - Pure Rust libraries for async and logging

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
