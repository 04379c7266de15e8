//! Authentication configuration types

use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 secret shared with the token issuer
    ///
    /// **REQUIRED** when authentication is enabled.
    /// Configure via `DEVHUB__AUTH__JWT__SECRET` environment variable
    /// or `auth.jwt.secret` in config file.
    /// Must be at least 32 characters.
    pub secret: String,

    /// Expected `iss` claim; not checked when unset
    pub issuer: Option<String>,
}

/// Authentication configuration
///
/// Disabled by default: search stays anonymous and `/api/auth/me` always
/// answers 401.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Enable bearer token verification
    pub enabled: bool,

    /// JWT configuration
    pub jwt: JwtConfig,
}
