//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{AuthConfig, LoggingConfig, ServerConfig, StoreConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Bearer token verification
    pub auth: AuthConfig,

    /// Document store selection
    pub store: StoreConfig,
}
