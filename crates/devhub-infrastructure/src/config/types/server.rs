//! Server configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{CORS_ANY_ORIGIN, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Attach CORS headers to responses
    pub enabled: bool,

    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![CORS_ANY_ORIGIN.to_string()],
        }
    }
}

impl CorsConfig {
    /// Value for `Access-Control-Allow-Origin` given the request origin
    ///
    /// Returns `None` when CORS is disabled or the origin is not allowed.
    pub fn allow_origin(&self, origin: Option<&str>) -> Option<String> {
        if !self.enabled {
            return None;
        }
        if self.allowed_origins.iter().any(|o| o == CORS_ANY_ORIGIN) {
            return Some(CORS_ANY_ORIGIN.to_string());
        }
        let origin = origin?;
        self.allowed_origins
            .iter()
            .find(|allowed| allowed.as_str() == origin)
            .cloned()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Listening port
    pub port: u16,

    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            cors: CorsConfig::default(),
        }
    }
}
