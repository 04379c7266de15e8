//! Configuration types module

pub mod app;
pub mod auth;
pub mod logging;
pub mod server;
pub mod store;

pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig};
pub use logging::LoggingConfig;
pub use server::{CorsConfig, ServerConfig};
pub use store::StoreConfig;
