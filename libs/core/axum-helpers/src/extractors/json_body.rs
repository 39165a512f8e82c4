//! JSON body extractor that reports decoding failures as [`AppError`].

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is [`AppError::InvalidJson`].
///
/// Axum's own `Json` rejects with plain-text bodies and a variety of status
/// codes; this wrapper routes every decoding failure (syntax error, wrong
/// shape, missing content type) to the same 400 JSON error body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_item(JsonBody(payload): JsonBody<ItemInput>) -> String {
///     format!("Creating item: {:?}", payload)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn echo(JsonBody(value): JsonBody<serde_json::Value>) -> String {
        value.to_string()
    }

    async fn send(body: &'static str, content_type: Option<&str>) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let response = Router::new()
            .route("/", post(echo))
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_json_is_extracted() {
        let (status, body) = send(r#"{"a":1}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_syntax_error_is_invalid_json() {
        let (status, body) = send(r#"{"a":"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("\"error\":\"Invalid JSON\""));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_invalid_json() {
        let (status, body) = send(r#"{"a":1}"#, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Request body contains invalid JSON"));
    }
}
