//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with tracing, panic recovery, fallback and OpenAPI document
//! - Listener setup with graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let app = create_router::<ApiDoc>(routes);
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_app, create_router};
pub use shutdown::shutdown_signal;
