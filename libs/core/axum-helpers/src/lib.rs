//! # Axum Helpers
//!
//! Shared building blocks for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`auth`]**: shared-secret `x-api-key` check for mutating requests
//! - **[`errors`]**: error taxonomy and the single JSON error responder
//! - **[`extractors`]**: JSON body, query and path extractors reporting failures as [`AppError`]
//! - **[`server`]**: router assembly, fallback, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(routes);
//!
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export auth types
pub use auth::{API_KEY_HEADER, ApiKeyAuth, ApiKeyConfig, require_api_key};

// Re-export server types
pub use server::{create_app, create_router, shutdown_signal};

// Re-export error types
pub use errors::{AppError, ErrorKind, ErrorResponse};

// Re-export extractors
pub use extractors::{JsonBody, PathParam, QueryParams};
