//! Shared-secret authentication.
//!
//! This module provides:
//! - `ApiKeyConfig`, loaded from `API_KEY`
//! - `ApiKeyAuth` and the `require_api_key` middleware guarding mutating routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyAuth, ApiKeyConfig, require_api_key};
//! use core_config::FromEnv;
//!
//! let auth = ApiKeyAuth::from_config(&ApiKeyConfig::from_env()?);
//!
//! let routes = Router::new()
//!     .route("/api/items", get(list).post(create))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, require_api_key));
//! ```

pub mod api_key;
pub mod config;

pub use api_key::{API_KEY_HEADER, ApiKeyAuth, require_api_key};
pub use config::{ApiKeyConfig, DEFAULT_API_KEY};
