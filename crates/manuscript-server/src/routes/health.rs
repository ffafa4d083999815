//! Health check and service metadata endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Human-readable status message.
    pub message: String,
}

/// Service metadata returned from the root path.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Configured application name.
    pub message: String,
    /// Crate version.
    pub version: String,
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "API is running".to_string(),
    })
}

/// GET / - Service name and version.
async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: state.config().app_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build health and metadata routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(service_info))
}
