//! manuscript-store: Storage layer for the Manuscript API
//!
//! This crate provides:
//! - PostgreSQL storage for projects and chapters
//! - Migration management
//! - Type-safe database operations via sqlx
//!
//! Every write is a single statement, immediately committed. Deleting a
//! project removes its chapters through the storage-level cascade.
//!
//! # Usage
//!
//! ```rust,ignore
//! use manuscript_store::{NewProject, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let project = store.insert_project(&NewProject::new("First draft")).await?;
//! let chapters = store.list_chapters(project.id).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::{Store, StoreConfig};

// Re-export manuscript-core for downstream crates
pub use manuscript_core;
