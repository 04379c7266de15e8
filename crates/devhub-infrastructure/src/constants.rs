//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "devhub.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "devhub";

/// Environment variable prefix for configuration overrides
///
/// Nested keys are separated by a double underscore, e.g.
/// `DEVHUB__SERVER__PORT` or `DEVHUB__AUTH__JWT__SECRET`.
pub const CONFIG_ENV_PREFIX: &str = "DEVHUB";

/// Separator between nested configuration keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3001;

/// Wildcard CORS origin
pub const CORS_ANY_ORIGIN: &str = "*";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "DEVHUB_LOG";

/// File name stem used for rotated log files when none is given
pub const DEFAULT_LOG_FILE_STEM: &str = "devhub";

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Minimum HS256 secret length accepted when authentication is enabled
pub const JWT_MIN_SECRET_LENGTH: usize = 32;

/// Authorization header scheme prefix
pub const BEARER_PREFIX: &str = "Bearer ";

// ============================================================================
// STORE
// ============================================================================

/// Default document store provider
pub const DEFAULT_STORE_PROVIDER: &str = "memory";
