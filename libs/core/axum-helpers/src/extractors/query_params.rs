//! Query string extractor that reports decoding failures as [`AppError`].

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Query extractor whose rejection is [`AppError::InvalidQuery`].
///
/// A query string that does not decode (duplicate scalar keys, bad escapes)
/// is answered with the standard JSON error body instead of axum's plain
/// text rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn list_items(QueryParams(filter): QueryParams<ItemFilter>) -> String {
///     format!("Filtering by {:?}", filter)
/// }
/// ```
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(params))
    }
}
