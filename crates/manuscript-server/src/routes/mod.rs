//! Route definitions for the HTTP API.

pub mod chapters;
pub mod health;
pub mod projects;

use axum::Router;

use crate::error::ApiError;
use crate::state::AppState;
use manuscript_store::StoreError;

/// Path prefix for the versioned API routes.
pub const API_PREFIX: &str = "/api/v1";

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .nest(
            API_PREFIX,
            Router::new()
                .merge(projects::routes())
                .merge(chapters::routes()),
        )
        .with_state(state)
}

/// Map a store failure on a project lookup to the API error surface.
///
/// A missing project becomes the 404 message the API promises; anything
/// else stays a storage error.
pub(crate) fn map_project_error(e: StoreError) -> ApiError {
    match e {
        StoreError::ProjectNotFound(_) => ApiError::project_not_found(),
        other => ApiError::Store(other),
    }
}
