//! Products API routes

use axum::{middleware, Router};
use axum_helpers::require_api_key;
use domain_products::handlers;

use crate::state::AppState;

/// Create products router
///
/// POST, PUT and DELETE must carry a valid `x-api-key`. The check runs as a
/// route layer, ahead of body decoding, and leaves unmatched paths to the
/// 404 fallback.
pub fn router(state: &AppState) -> Router {
    handlers::router(state.products.clone()).route_layer(middleware::from_fn_with_state(
        state.auth.clone(),
        require_api_key,
    ))
}
