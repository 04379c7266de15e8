//! Server constants

/// Mount point of every API route
pub const API_BASE: &str = "/api";

/// Generic body message for unexpected failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body message when a protected route is called without valid credentials
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required";

/// Header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Health status reported while the server is serving
pub const HEALTH_STATUS_OK: &str = "ok";
