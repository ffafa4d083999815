//! manuscript-core: Domain layer for the Manuscript API
//!
//! This crate provides:
//! - Shared domain constants (default resource status)
//! - Derived-field computation (word counts, per-project aggregates)
//!
//! Derived values are never persisted. Callers recompute them from
//! chapter content on every read.

pub mod stats;
pub mod wordcount;

pub use stats::ProjectStats;
pub use wordcount::count_words;

/// Status assigned to projects and chapters when none is given.
///
/// Status is free text with conventional values; no transition
/// validation is performed anywhere.
pub const DEFAULT_STATUS: &str = "draft";
