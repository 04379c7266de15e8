//! Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`DocumentStoreProvider`] | Read access to the platform's collections |

/// Document store port
pub mod document_store;

pub use document_store::DocumentStoreProvider;
