//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **registry/** - Auto-registration system for document store providers
//! - **services.rs** - Application service interfaces (search)

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use registry::{
    DOCUMENT_STORE_PROVIDERS, DocumentStoreProviderConfig, DocumentStoreProviderEntry,
    list_document_store_providers, resolve_document_store_provider,
};
pub use services::SearchServiceInterface;
