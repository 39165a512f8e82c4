//! Capability listing served at `/`

use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

const ENDPOINTS: [(&str, &str); 8] = [
    ("list", "GET /api/products?category=&inStock=&page=&limit="),
    ("search", "GET /api/products/search?q="),
    ("stats", "GET /api/products/stats"),
    ("get", "GET /api/products/{id}"),
    ("create", "POST /api/products (x-api-key required)"),
    ("update", "PUT /api/products/{id} (x-api-key required)"),
    ("delete", "DELETE /api/products/{id} (x-api-key required)"),
    ("openapi", "GET /api-docs/openapi.json"),
];

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Products API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS.into_iter().collect(),
    })
}
