//! Project routes for the Manuscript API.
//!
//! This module implements the project-related HTTP endpoints:
//! - GET /api/v1/projects - List projects with derived counts
//! - POST /api/v1/projects - Create a project
//! - GET /api/v1/projects/{id} - Fetch a project with derived counts
//! - DELETE /api/v1/projects/{id} - Delete a project and its chapters

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use manuscript_core::ProjectStats;
use manuscript_store::{NewProject, ProjectRow, Store};

use crate::envelope::{Collection, Document, Meta, Pagination, Resource};
use crate::error::{ApiError, ApiResult};
use crate::routes::map_project_error;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /projects.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project title. Must be non-empty.
    pub title: String,
    /// Initial status; defaults to "draft".
    pub status: Option<String>,
}

/// Serialized attributes of a project resource.
#[derive(Debug, Serialize)]
pub struct ProjectAttributes {
    pub title: String,
    pub status: String,
    /// Number of chapters, recomputed on every read.
    pub chapter_count: usize,
    /// Whitespace-token total over all chapter content, recomputed on
    /// every read.
    pub word_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response for DELETE /projects/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteProjectResponse {
    /// ID of the deleted project.
    pub id: String,
    /// Confirmation message.
    pub message: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Shape a project row and its derived stats into an envelope resource.
fn project_resource(row: ProjectRow, stats: ProjectStats) -> Resource<ProjectAttributes> {
    Resource::new(
        row.id,
        "project",
        ProjectAttributes {
            title: row.title,
            status: row.status,
            chapter_count: stats.chapter_count,
            word_count: stats.word_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        },
    )
}

/// Recompute a project's chapter and word counts from its chapters.
async fn project_stats(store: &Store, project_id: i64) -> ApiResult<ProjectStats> {
    let chapters = store.list_chapters(project_id).await?;
    Ok(ProjectStats::from_contents(
        chapters.iter().map(|c| c.content.as_str()),
    ))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /projects - List all projects with derived counts.
///
/// # Response
///
/// - 200 OK: `{ "data": [...], "meta": { "pagination": ... } }`
async fn list_projects(
    State(state): State<AppState>,
) -> ApiResult<Json<Collection<ProjectAttributes>>> {
    let store = state.store();

    let rows = store.list_projects().await?;

    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        let stats = project_stats(store, row.id).await?;
        data.push(project_resource(row, stats));
    }

    tracing::info!(count = data.len(), "Listed projects");

    let total = data.len();
    Ok(Json(Collection {
        data,
        meta: Some(Meta {
            pagination: Pagination::single_page(total),
        }),
    }))
}

/// POST /projects - Create a project.
///
/// # Request
///
/// Body: `{ "title": "My Novel", "status": "draft" }` (status optional)
///
/// # Response
///
/// - 201 Created: project envelope with zero counts
/// - 422 Unprocessable Entity: missing or empty title
async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Document<ProjectAttributes>>)> {
    if request.title.trim().is_empty() {
        return Err(ApiError::empty_field("title"));
    }

    let mut new_project = NewProject::new(request.title);
    if let Some(status) = request.status {
        new_project = new_project.status(status);
    }

    let row = state
        .store()
        .insert_project(&new_project)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create project");
            ApiError::Store(e)
        })?;

    tracing::info!(project_id = row.id, title = %row.title, "Project created");

    // A project starts without chapters, so both counts are zero.
    Ok((
        StatusCode::CREATED,
        Json(Document {
            data: project_resource(row, ProjectStats::default()),
        }),
    ))
}

/// GET /projects/{id} - Fetch a project with derived counts.
///
/// # Response
///
/// - 200 OK: project envelope
/// - 404 Not Found: no project with this id
async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Document<ProjectAttributes>>> {
    let store = state.store();

    let row = store
        .get_project(project_id)
        .await
        .map_err(map_project_error)?;
    let stats = project_stats(store, project_id).await?;

    Ok(Json(Document {
        data: project_resource(row, stats),
    }))
}

/// DELETE /projects/{id} - Delete a project.
///
/// Chapters go with it through the storage-level cascade.
///
/// # Response
///
/// - 200 OK: `{ "id": "...", "message": "Project deleted successfully" }`
/// - 404 Not Found: no project with this id
async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<DeleteProjectResponse>> {
    state
        .store()
        .delete_project(project_id)
        .await
        .map_err(map_project_error)?;

    tracing::info!(project_id, "Project deleted");

    Ok(Json(DeleteProjectResponse {
        id: project_id.to_string(),
        message: "Project deleted successfully".to_string(),
    }))
}

/// Build project routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", get(get_project).delete(delete_project))
}

// ============================================================================
// Tests
// ============================================================================
