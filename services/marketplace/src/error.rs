//! Custom error types for the marketplace service

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::StoreError;
use serde_json::json;
use thiserror::Error;

use crate::session::SessionError;
use crate::validation::FieldError;

/// Custom error type for the marketplace service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or unknown session
    #[error("Unauthorized")]
    Unauthorized,

    /// Rejected credentials
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated, but not allowed to touch the resource
    #[error("Forbidden")]
    Forbidden,

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Form fields failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidCredentials => ApiError::InvalidCredentials,
            SessionError::Store(e) => ApiError::Store(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection);
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection);
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(fields) => {
                let body = Json(json!({
                    "error": "Validation failed",
                    "fields": fields,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Store(e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Store error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ApiError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (ApiError::Forbidden, StatusCode::FORBIDDEN),
            (
                ApiError::NotFound("Listing not found".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (ApiError::BadRequest("bad".to_string()), StatusCode::BAD_REQUEST),
            (ApiError::Validation(vec![]), StatusCode::UNPROCESSABLE_ENTITY),
            (
                ApiError::Store(StoreError::InvalidKey("a/b".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_session_error_mapping() {
        assert!(matches!(
            ApiError::from(SessionError::InvalidCredentials),
            ApiError::InvalidCredentials
        ));
    }
}
