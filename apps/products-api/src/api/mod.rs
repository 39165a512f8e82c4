//! API routes module

pub mod index;
pub mod products;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .nest("/api/products", products::router(state))
}
