use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::config::ApiKeyConfig;
use crate::errors::AppError;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared-secret check for mutating requests.
#[derive(Clone, Debug)]
pub struct ApiKeyAuth {
    secret: Arc<str>,
}

impl ApiKeyAuth {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::from(secret.into()),
        }
    }

    pub fn from_config(config: &ApiKeyConfig) -> Self {
        Self::new(config.secret.clone())
    }

    /// Only POST, PUT and DELETE need a credential.
    pub fn requires_key(method: &Method) -> bool {
        matches!(*method, Method::POST | Method::PUT | Method::DELETE)
    }

    /// Decide pass/fail for a request.
    pub fn check(&self, method: &Method, headers: &HeaderMap) -> Result<(), AppError> {
        if !Self::requires_key(method) {
            return Ok(());
        }

        match headers.get(API_KEY_HEADER) {
            None => Err(AppError::Authentication("API key is required".to_string())),
            Some(value) if value.as_bytes() == self.secret.as_bytes() => Ok(()),
            Some(_) => Err(AppError::Authentication("Invalid API key".to_string())),
        }
    }
}

/// API key middleware.
///
/// Read-only requests pass straight through; mutating requests must carry
/// the configured secret in `x-api-key`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum_helpers::{ApiKeyAuth, require_api_key};
///
/// let auth = ApiKeyAuth::new("secret");
///
/// let routes = Router::new()
///     .route("/items", post(create_item))
///     .route_layer(axum::middleware::from_fn_with_state(auth, require_api_key));
/// ```
pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(err) = auth.check(request.method(), request.headers()) {
        tracing::debug!(
            method = %request.method(),
            path = request.uri().path(),
            "Rejected request without valid API key"
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    fn headers_with(key: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(key) = key {
            headers.insert(API_KEY_HEADER, key.parse().unwrap());
        }
        headers
    }

    #[test]
    fn test_get_passes_without_key() {
        let auth = ApiKeyAuth::new("secret");
        assert!(auth.check(&Method::GET, &headers_with(None)).is_ok());
        assert!(auth.check(&Method::GET, &headers_with(Some("wrong"))).is_ok());
    }

    #[test]
    fn test_mutating_methods_require_key() {
        let auth = ApiKeyAuth::new("secret");
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let missing = auth.check(&method, &headers_with(None)).unwrap_err();
            assert_eq!(missing.to_string(), "API key is required");

            let wrong = auth.check(&method, &headers_with(Some("Secret"))).unwrap_err();
            assert_eq!(wrong.to_string(), "Invalid API key");

            assert!(auth.check(&method, &headers_with(Some("secret"))).is_ok());
        }
    }

    #[tokio::test]
    async fn test_middleware_short_circuits_with_401() {
        let app = Router::new()
            .route("/", get(|| async { "read" }).post(|| async { "written" }))
            .route_layer(middleware::from_fn_with_state(
                ApiKeyAuth::new("secret"),
                require_api_key,
            ));

        let response = app
            .clone()
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/")
                    .header(API_KEY_HEADER, "secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
