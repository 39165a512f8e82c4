//! Custom extractors for Axum handlers.
//!
//! Each wraps the axum extractor of the same concern and rejects with
//! [`AppError`](crate::AppError), so failures share the JSON error body.

pub mod json_body;
pub mod path_param;
pub mod query_params;

pub use json_body::JsonBody;
pub use path_param::PathParam;
pub use query_params::QueryParams;
