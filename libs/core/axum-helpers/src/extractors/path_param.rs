//! Path parameter extractor that reports decoding failures as [`AppError`].

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Path extractor whose rejection is [`AppError::InvalidPath`].
///
/// Segments that fail to decode (for example invalid UTF-8 after percent
/// decoding) produce the standard JSON error body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::PathParam;
///
/// async fn get_item(PathParam(id): PathParam<String>) -> String {
///     format!("Item ID: {}", id)
/// }
/// ```
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}
