//! Infrastructure Ports

/// Bearer token verification port
pub mod auth;

pub use auth::{AuthClaims, TokenVerifier};
