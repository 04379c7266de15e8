//! # DevHub
//!
//! Read-side search API of the DevHub community platform.
//!
//! A single query fans out over users, repositories, store items, ideas,
//! resources, news and events, and the merged hits are ranked so users and
//! prefix matches come first.
//!
//! ## Example
//!
//! ```ignore
//! use devhub::domain::value_objects::SearchQuery;
//!
//! let query = SearchQuery::parse(Some("  zen "))?;
//! assert_eq!(query.text(), "zen");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, ranking and ports
//! - `application` - Search use case and provider registry
//! - `infrastructure` - Config, logging, auth and bootstrap
//! - `server` - Rocket routes and error mapping

/// Domain layer - entities, value objects and ports
pub mod domain {
    pub use devhub_domain::*;
}

/// Application layer - search use case and provider registry
pub mod application {
    pub use devhub_application::*;
}

/// Infrastructure layer - config, logging, auth and bootstrap
pub mod infrastructure {
    pub use devhub_infrastructure::*;
}

/// Server layer - HTTP routes
pub mod server {
    pub use devhub_server::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Result};

// Re-export main entry point at the crate root
pub use server::run;
