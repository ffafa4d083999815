//! manuscript-server: HTTP API server for the Manuscript API
//!
//! This crate provides:
//! - REST endpoints for projects and chapters under `/api/v1`
//! - A stable `{data, meta}` resource envelope over JSON
//! - Word and chapter counts derived from chapter content on every read
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use manuscript_server::{config::ServerConfig, routes, state::AppState};
//! use manuscript_store::{Store, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     let store = Store::connect(StoreConfig::from_env()?).await?;
//!     let app = routes::build_router(AppState::new(store, config));
//!     // bind and serve...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use manuscript_core;
pub use manuscript_store;
