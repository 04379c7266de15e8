//! # DevHub - Provider Implementations
//!
//! User-selectable implementations of the ports defined in `devhub-domain`.
//! Every provider registers itself into the linkme registry declared in
//! `devhub-application`, so linking this crate is enough to make it
//! selectable from configuration.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Document Store | `DocumentStoreProvider` | InMemory (`memory`), Null (`null`) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! devhub-providers = { version = "0.1", default-features = false }
//! ```

// Re-export devhub-domain types commonly used with providers
pub use devhub_domain::error::{Error, Result};
pub use devhub_domain::ports::providers::DocumentStoreProvider;

/// Document store provider implementations
///
/// Implements `DocumentStoreProvider` for storage backends.
pub mod document_store;
