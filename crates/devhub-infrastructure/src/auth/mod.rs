//! Bearer token verification
//!
//! Implementations of the domain `TokenVerifier` port.

pub mod jwt;

pub use jwt::{JwtTokenVerifier, NullTokenVerifier, token_verifier_from_config};
