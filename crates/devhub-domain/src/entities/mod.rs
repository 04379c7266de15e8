//! Domain Entities
//!
//! Records owned by the platform's CRUD subsystems. The search subsystem
//! only reads them.
//!
//! | Entity | Collection | Title field | Description field |
//! |--------|------------|-------------|-------------------|
//! | [`User`] | users | `display_name` / `username` | - |
//! | [`Repository`] | repositories | `name` | `description` |
//! | [`StoreItem`] | store items | `name` | `description` |
//! | [`Idea`] | ideas | `title` | `description` |
//! | [`Resource`] | resources | `title` | `description` |
//! | [`NewsArticle`] | news | `title` | `excerpt` |
//! | [`Event`] | events | `title` | `description` |

/// Content entities (repositories, tools, ideas, resources, news, events)
pub mod content;
/// Platform user entity
pub mod user;

pub use content::{Event, Idea, NewsArticle, Repository, Resource, StoreItem};
pub use user::User;
