use axum::{
    extract::OriginalUri,
    http::Method,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::{AppError, ErrorKind, error_response};

/// Fallback for requests no route claimed.
///
/// Also used as the method-not-allowed fallback, so a known path hit with
/// an unsupported method is answered the same way as an unknown path.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    tracing::debug!(%method, path = uri.path(), "No route matched");
    error_response(
        ErrorKind::RouteNotFound,
        format!("Route {} {} not found", method, uri.path()),
    )
}

/// Converts a handler panic into a 500 response.
///
/// Intended for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
