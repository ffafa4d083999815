//! Chapter routes for the Manuscript API.
//!
//! This module implements the chapter-related HTTP endpoints:
//! - GET /api/v1/projects/{id}/chapters - Ordered chapter list
//! - POST /api/v1/projects/{id}/chapters - Create a chapter
//!
//! Both endpoints return 404 when the parent project does not exist.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use manuscript_core::count_words;
use manuscript_store::{ChapterRow, NewChapter};

use crate::envelope::{Collection, Document, Resource};
use crate::error::{ApiError, ApiResult};
use crate::routes::map_project_error;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /projects/{id}/chapters.
#[derive(Debug, Deserialize)]
pub struct CreateChapterRequest {
    /// Chapter title. Must be non-empty.
    pub title: String,
    /// Chapter text; defaults to empty.
    pub content: Option<String>,
    /// Display order; defaults to 0, not unique.
    pub order: Option<i32>,
    /// Initial status; defaults to "draft".
    pub status: Option<String>,
}

/// Serialized attributes of a chapter resource.
#[derive(Debug, Serialize)]
pub struct ChapterAttributes {
    /// Owning project id, serialized as a string like every identity.
    pub project_id: String,
    pub title: String,
    pub content: String,
    pub order: i32,
    pub status: String,
    /// Whitespace-token count of `content`, recomputed on every read.
    pub word_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Shape a chapter row into an envelope resource with its word count.
fn chapter_resource(row: ChapterRow) -> Resource<ChapterAttributes> {
    let word_count = count_words(&row.content);
    Resource::new(
        row.id,
        "chapter",
        ChapterAttributes {
            project_id: row.project_id.to_string(),
            title: row.title,
            content: row.content,
            order: row.order,
            status: row.status,
            word_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        },
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /projects/{id}/chapters - List a project's chapters.
///
/// Chapters come back ordered by their `order` field ascending; ties
/// keep insertion order.
///
/// # Response
///
/// - 200 OK: `{ "data": [...] }`
/// - 404 Not Found: no project with this id
async fn list_chapters(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Collection<ChapterAttributes>>> {
    let store = state.store();

    // A project that never existed is a 404, not an empty list.
    store
        .get_project(project_id)
        .await
        .map_err(map_project_error)?;

    let rows = store.list_chapters(project_id).await?;
    let data = rows.into_iter().map(chapter_resource).collect();

    Ok(Json(Collection { data, meta: None }))
}

/// POST /projects/{id}/chapters - Create a chapter under a project.
///
/// # Request
///
/// Body: `{ "title": "Chapter One", "content": "...", "order": 1,
/// "status": "draft" }` (all but title optional)
///
/// # Response
///
/// - 201 Created: chapter envelope including its word_count
/// - 404 Not Found: no project with this id
/// - 422 Unprocessable Entity: missing or empty title
async fn create_chapter(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(request): Json<CreateChapterRequest>,
) -> ApiResult<(StatusCode, Json<Document<ChapterAttributes>>)> {
    if request.title.trim().is_empty() {
        return Err(ApiError::empty_field("title"));
    }

    let mut new_chapter = NewChapter::new(project_id, request.title);
    if let Some(content) = request.content {
        new_chapter = new_chapter.content(content);
    }
    if let Some(order) = request.order {
        new_chapter = new_chapter.order(order);
    }
    if let Some(status) = request.status {
        new_chapter = new_chapter.status(status);
    }

    let row = state
        .store()
        .insert_chapter(&new_chapter)
        .await
        .map_err(map_project_error)?;

    tracing::info!(chapter_id = row.id, project_id, "Chapter created");

    Ok((
        StatusCode::CREATED,
        Json(Document {
            data: chapter_resource(row),
        }),
    ))
}

/// Build chapter routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/projects/{id}/chapters",
        get(list_chapters).post(create_chapter),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(content: &str) -> ChapterRow {
        ChapterRow {
            id: 3,
            project_id: 7,
            title: "Chapter One".to_string(),
            content: content.to_string(),
            order: 1,
            status: "draft".to_string(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateChapterRequest =
            serde_json::from_str(r#"{"title": "Chapter One"}"#).unwrap();
        assert_eq!(request.title, "Chapter One");
        assert!(request.content.is_none());
        assert!(request.order.is_none());
        assert!(request.status.is_none());
    }

    #[test]
    fn test_create_request_full_body() {
        let request: CreateChapterRequest = serde_json::from_str(
            r#"{"title": "Chapter One", "content": "text", "order": 4, "status": "review"}"#,
        )
        .unwrap();
        assert_eq!(request.content.as_deref(), Some("text"));
        assert_eq!(request.order, Some(4));
        assert_eq!(request.status.as_deref(), Some("review"));
    }

    #[test]
    fn test_chapter_resource_word_count() {
        let resource = chapter_resource(sample_row("Hello world  foo"));
        assert_eq!(resource.attributes.word_count, 3);

        let resource = chapter_resource(sample_row(""));
        assert_eq!(resource.attributes.word_count, 0);
    }

    #[test]
    fn test_chapter_resource_ids_are_strings() {
        let resource = chapter_resource(sample_row("text"));
        let json = serde_json::to_string(&resource).unwrap();
        assert!(json.contains("\"id\":\"3\""));
        assert!(json.contains("\"type\":\"chapter\""));
        assert!(json.contains("\"project_id\":\"7\""));
    }
}
