//! Configuration management
//!
//! Typed configuration sections and the figment-based loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, AuthConfig, CorsConfig, JwtConfig, LoggingConfig, ServerConfig, StoreConfig,
};
