//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Validation failure for a request field (422).
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] manuscript_store::StoreError),
}

impl ApiError {
    /// Validation error for a required text field that came in empty.
    pub fn empty_field(field: &'static str) -> Self {
        Self::Validation {
            field,
            message: format!("{field} must not be empty"),
        }
    }

    /// 404 for a missing project, with the message the API promises.
    pub fn project_not_found() -> Self {
        Self::NotFound("Project not found".to_string())
    }

    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                manuscript_store::StoreError::ProjectNotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Offending field for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let field = match &self {
            Self::Validation { field, .. } => Some((*field).to_string()),
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.to_string(),
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use manuscript_store::StoreError;

    #[test]
    fn validation_maps_to_422_with_field() {
        let err = ApiError::empty_field("title");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "title must not be empty");
    }

    #[test]
    fn not_found_message_passes_through() {
        let err = ApiError::project_not_found();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Project not found");
    }

    #[test]
    fn store_project_not_found_maps_to_404() {
        let err = ApiError::Store(StoreError::ProjectNotFound(42));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_config_error_maps_to_500() {
        let err = ApiError::Store(StoreError::ConfigError("bad".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_includes_field_for_validation() {
        let body = ErrorResponse {
            error: ErrorDetails {
                code: "VALIDATION_ERROR".to_string(),
                message: "title must not be empty".to_string(),
                field: Some("title".to_string()),
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"field\":\"title\""));
    }

    #[test]
    fn error_body_omits_field_when_absent() {
        let body = ErrorResponse {
            error: ErrorDetails {
                code: "NOT_FOUND".to_string(),
                message: "Project not found".to_string(),
                field: None,
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("field"));
        assert!(json.contains("Project not found"));
    }
}
