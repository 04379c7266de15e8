//! Domain Port Interfaces
//!
//! Contracts between the domain and the outer layers. The domain defines
//! the traits; providers and infrastructure implement them.
//!
//! ## Organization
//!
//! - **providers/** - Data providers (document store)
//! - **infrastructure/** - Cross-cutting services (token verification)

/// Infrastructure service ports
pub mod infrastructure;
/// External data provider ports
pub mod providers;

pub use infrastructure::{AuthClaims, TokenVerifier};
pub use providers::DocumentStoreProvider;
