//! HS256 JWT verification

use std::sync::Arc;

use devhub_domain::error::{Error, Result};
use devhub_domain::ports::infrastructure::{AuthClaims, TokenVerifier};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::config::AuthConfig;
use crate::error_ext::ErrorContext;

/// Verifies HS256 tokens signed with a shared secret
///
/// Expiry is always checked. The issuer is checked only when one is
/// configured.
pub struct JwtTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Create a verifier for `secret`, optionally pinning the issuer
    pub fn new(secret: &str, issuer: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
            validation.set_required_spec_claims(&["exp", "iss"]);
        }

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<AuthClaims> {
        let data =
            decode::<AuthClaims>(token, &self.key, &self.validation).auth_context("Invalid token")?;
        Ok(data.claims)
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Verifier used when authentication is disabled
///
/// Every token is rejected, so protected routes stay closed and optional
/// identity is always anonymous.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTokenVerifier;

impl NullTokenVerifier {
    /// Create a new null verifier
    pub fn new() -> Self {
        Self
    }
}

impl TokenVerifier for NullTokenVerifier {
    fn verify(&self, _token: &str) -> Result<AuthClaims> {
        Err(Error::authentication("Authentication is disabled"))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Build the verifier selected by `config`
pub fn token_verifier_from_config(config: &AuthConfig) -> Arc<dyn TokenVerifier> {
    if config.enabled {
        Arc::new(JwtTokenVerifier::new(
            &config.jwt.secret,
            config.jwt.issuer.as_deref(),
        ))
    } else {
        Arc::new(NullTokenVerifier::new())
    }
}
