//! Products API
//!
//! Library half of the service: configuration, state and route assembly.
//! `main.rs` only wires these to the process environment.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;

pub use config::Config;
pub use state::AppState;

/// Fully assembled application: routes, OpenAPI document, fallback,
/// panic catcher and request tracing.
pub fn app(state: &AppState) -> Router {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state))
}
