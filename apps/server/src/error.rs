//! Error handling for the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lexiflow_core::{ImportError, SessionError, StoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::Invalid(_) => ApiError::BadRequest(err.to_string()),
            StoreError::Poisoned => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Empty => ApiError::BadRequest(err.to_string()),
            SessionError::Finished => ApiError::Conflict(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_status() {
        let error = ApiError::NotFound("word 123".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_status() {
        let error = ApiError::BadRequest("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_status() {
        let error = ApiError::Conflict("finished".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal("unexpected error".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_errors_map_to_status() {
        let id = Uuid::nil();
        let error: ApiError = StoreError::NotFound { kind: "topic", id }.into();
        assert_eq!(
            error.to_string(),
            format!("Not found: topic not found: {id}")
        );

        let error: ApiError = StoreError::Invalid(ValidationError::EmptyTerm).into();
        assert!(matches!(error, ApiError::BadRequest(_)));

        let error: ApiError = StoreError::Poisoned.into();
        assert!(matches!(error, ApiError::Internal(_)));
    }

    #[test]
    fn test_session_errors_map_to_status() {
        let error: ApiError = SessionError::Empty.into();
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);

        let error: ApiError = SessionError::Finished.into();
        assert_eq!(error.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_display_bad_request() {
        let error = ApiError::BadRequest("missing field".to_string());
        assert_eq!(error.to_string(), "Bad request: missing field");
    }
}
