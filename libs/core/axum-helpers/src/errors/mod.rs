pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorKind;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response body.
///
/// Every error the API answers with has this shape:
///
/// ```json
/// {
///   "error": "NotFoundError",
///   "message": "Product with id 42 not found",
///   "statusCode": 404
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error kind name
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            error: kind.as_str().to_string(),
            message: message.into(),
            status_code: kind.status().as_u16(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the terminal stage of the request pipeline: handlers and
/// middleware return it, and `IntoResponse` is the only place where error
/// bodies are formatted.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("JSON extraction error: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("Query string extraction error: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Path extraction error: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Authentication(_) => ErrorKind::Authentication,
            AppError::InvalidJson(_) => ErrorKind::InvalidJson,
            AppError::InvalidQuery(_) | AppError::InvalidPath(_) => ErrorKind::Validation,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Client-facing message for an undecodable query string.
pub const INVALID_QUERY_MESSAGE: &str = "Query string contains invalid parameters";

/// Client-facing message for an undecodable path segment.
pub const INVALID_PATH_MESSAGE: &str = "Request path contains an invalid parameter";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = match self {
            AppError::NotFound(msg) => {
                tracing::info!(error_kind = %kind, "Not found: {}", msg);
                msg
            }
            AppError::Validation(msg) => {
                tracing::info!(error_kind = %kind, "Validation error: {}", msg);
                msg
            }
            AppError::Authentication(msg) => {
                tracing::info!(error_kind = %kind, "Authentication failed: {}", msg);
                msg
            }
            AppError::InvalidJson(rejection) => {
                tracing::warn!(
                    error_kind = %kind,
                    "JSON extraction error: {}",
                    rejection.body_text()
                );
                kind.default_message().to_string()
            }
            AppError::InvalidQuery(rejection) => {
                tracing::warn!(
                    error_kind = %kind,
                    "Query string extraction error: {}",
                    rejection.body_text()
                );
                INVALID_QUERY_MESSAGE.to_string()
            }
            AppError::InvalidPath(rejection) => {
                tracing::warn!(
                    error_kind = %kind,
                    "Path extraction error: {}",
                    rejection.body_text()
                );
                INVALID_PATH_MESSAGE.to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!(error_kind = %kind, "Internal server error: {}", detail);
                kind.default_message().to_string()
            }
        };

        error_response(kind, message)
    }
}

/// Build an error response for `kind` with a custom message.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorKind};
///
/// let response = error_response(ErrorKind::RouteNotFound, "Route GET /nope not found");
/// ```
pub fn error_response(kind: ErrorKind, message: impl Into<String>) -> Response {
    (kind.status(), Json(ErrorResponse::new(kind, message))).into_response()
}
