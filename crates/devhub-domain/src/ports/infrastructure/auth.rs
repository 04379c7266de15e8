//! Token Verification Port
//!
//! Defines the contract for verifying bearer tokens issued by the
//! platform's sign-in flow. Issuance lives outside this service.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Claims carried by a verified bearer token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthClaims {
    /// Subject (user id)
    pub sub: String,
    /// Login handle, when the issuer includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Expiration (unix seconds)
    pub exp: u64,
    /// Issued at (unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Bearer token verifier interface
///
/// Verification is CPU-only, so the trait is synchronous and can be called
/// from request guards directly.
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and return its claims
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Authentication`] for malformed, expired or
    /// badly signed tokens.
    fn verify(&self, token: &str) -> Result<AuthClaims>;

    /// Whether verification is active
    fn is_enabled(&self) -> bool;
}
