//! Provider Registry System
//!
//! Auto-registration infrastructure for document store providers. Uses the
//! `linkme` crate for compile-time registration of providers that are
//! discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = memory" → InMemoryStore      │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in devhub-providers)
//!
//! ```ignore
//! use devhub_application::ports::registry::{DOCUMENT_STORE_PROVIDERS, DocumentStoreProviderEntry};
//!
//! #[linkme::distributed_slice(DOCUMENT_STORE_PROVIDERS)]
//! static MEMORY_PROVIDER: DocumentStoreProviderEntry = DocumentStoreProviderEntry {
//!     name: "memory",
//!     description: "In-memory document store",
//!     factory: |config| Ok(Arc::new(InMemoryDocumentStore::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in devhub-infrastructure)
//!
//! ```ignore
//! use devhub_application::ports::registry::resolve_document_store_provider;
//!
//! let config = DocumentStoreProviderConfig::new("memory");
//! let store = resolve_document_store_provider(&config)?;
//! ```

pub mod document_store;

pub use document_store::{
    DOCUMENT_STORE_PROVIDERS, DocumentStoreProviderConfig, DocumentStoreProviderEntry,
    list_document_store_providers, resolve_document_store_provider,
};
