//! # DevHub Server
//!
//! HTTP surface of the platform's read-side search.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api/search?q=` | GET | Aggregated search across all collections |
//! | `/api/health` | GET | Liveness, uptime and active store |
//! | `/api/auth/me` | GET | Claims of the presented bearer token |
//!
//! Errors from every route pass through [`error::ApiError`], and
//! framework-level failures through the JSON [`catchers`], so clients
//! always receive `{ "message": ... }` bodies.

pub mod auth;
pub mod catchers;
pub mod constants;
pub mod cors;
pub mod error;
pub mod init;
pub mod routes;

pub use init::{build_rocket, run};
