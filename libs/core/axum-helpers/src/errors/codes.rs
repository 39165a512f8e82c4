//! Type-safe error kinds for API responses.
//!
//! Every error the API can answer with belongs to exactly one kind. A kind
//! carries:
//! - the name placed in the `error` field of the response body
//! - the HTTP status code
//! - a default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum::http::StatusCode;
//! use axum_helpers::errors::ErrorKind;
//!
//! let kind = ErrorKind::Validation;
//! assert_eq!(kind.as_str(), "ValidationError");
//! assert_eq!(kind.status(), StatusCode::BAD_REQUEST);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorKind {
    /// Requested entity id does not exist
    NotFound,

    /// One or more field rules violated, or a required parameter missing
    Validation,

    /// Missing or incorrect credential on a mutating request
    Authentication,

    /// Request body could not be decoded as JSON
    InvalidJson,

    /// No route matched the request method and path
    RouteNotFound,

    /// Anything not covered above
    Internal,
}

impl ErrorKind {
    /// Name placed in the `error` field of the response body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFoundError",
            Self::Validation => "ValidationError",
            Self::Authentication => "AuthenticationError",
            Self::InvalidJson => "Invalid JSON",
            Self::RouteNotFound => "Not Found",
            Self::Internal => "Internal Server Error",
        }
    }

    /// Fixed HTTP status for this kind.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Validation | Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default user-facing message.
    ///
    /// `InvalidJson` and `Internal` always use this message so that decoder
    /// and server internals never reach the client.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Resource not found",
            Self::Validation => "Request validation failed",
            Self::Authentication => "Authentication required",
            Self::InvalidJson => "Request body contains invalid JSON",
            Self::RouteNotFound => "Route not found",
            Self::Internal => "Something went wrong",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
