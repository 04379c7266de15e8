//! Document Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullDocumentStore | Testing | Always empty |
//! | InMemoryDocumentStore | Local | Concurrent in-memory collections, optionally seeded from JSON |

#[cfg(feature = "store-memory")]
pub mod in_memory;
pub mod null;
#[cfg(feature = "store-memory")]
pub mod seed;

#[cfg(feature = "store-memory")]
pub use in_memory::InMemoryDocumentStore;
pub use null::NullDocumentStore;
#[cfg(feature = "store-memory")]
pub use seed::SeedData;
