//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. Derived values (word counts, chapter counts) are computed
//! by callers from these rows and never stored.

use chrono::{DateTime, Utc};
use manuscript_core::DEFAULT_STATUS;
use sqlx::FromRow;

/// Database row for the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database row for the `chapters` table.
#[derive(Debug, Clone, FromRow)]
pub struct ChapterRow {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub content: String,
    /// Display ordering; not unique across a project's chapters.
    pub order: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub status: String,
}

impl NewProject {
    /// Create input for a project with the default status.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: DEFAULT_STATUS.to_string(),
        }
    }

    /// Override the initial status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Input for creating a new chapter.
///
/// Builder-style setters cover the optional fields; unset fields take
/// the documented defaults (empty content, order 0, draft status).
#[derive(Debug, Clone)]
pub struct NewChapter {
    pub project_id: i64,
    pub title: String,
    pub content: String,
    pub order: i32,
    pub status: String,
}

impl NewChapter {
    pub fn new(project_id: i64, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            content: String::new(),
            order: 0,
            status: DEFAULT_STATUS.to_string(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}
