//! # DevHub Infrastructure Layer
//!
//! Cross-cutting technical concerns shared by the server and the binary.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML, environment) |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`auth`] | Bearer token verification |
//! | [`di`] | Composition root ([`di::AppContext`]) |
//! | [`error_ext`] | Context helpers converting foreign errors |
//! | [`utils`] | Timing helpers |

// Force linkme registration of document store providers
extern crate devhub_providers;

pub mod auth;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod utils;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
