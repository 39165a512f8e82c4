//! Handler tests for Products domain
//!
//! These drive `handlers::router` directly over the in-memory store:
//! - Request decoding and validation
//! - Response shapes and HTTP status codes
//! - Error bodies
//!
//! Authentication is layered on by the application and is not part of
//! these tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app_with(repo: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repo))
}

fn app() -> Router {
    app_with(InMemoryProductRepository::seeded())
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_returns_page_with_metadata() {
    let response = app().oneshot(get("/?limit=10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.products.len(), 3);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.pagination.products_per_page, 10);
}

#[tokio::test]
async fn test_list_filters_and_bad_paging_fall_back() {
    let response = app()
        .oneshot(get("/?category=Electronics&page=abc&limit=-5"))
        .await
        .unwrap();
    let body: Value = json_body(response.into_body()).await;

    assert_eq!(body["products"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["currentPage"], 1);
    assert_eq!(body["pagination"]["productsPerPage"], 10);
}

#[tokio::test]
async fn test_empty_query_params_are_ignored() {
    let response = app().oneshot(get("/?category=&inStock=")).await.unwrap();
    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.pagination.total_products, 3);
}

#[tokio::test]
async fn test_search_without_query_is_validation_error() {
    let response = app().oneshot(get("/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "ValidationError");
    assert_eq!(body["message"], "Search query 'q' is required");
    assert_eq!(body["statusCode"], 400);
}

#[tokio::test]
async fn test_search_is_not_treated_as_an_id() {
    let response = app().oneshot(get("/search?q=coffee")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let results: SearchResults = json_body(response.into_body()).await;
    assert_eq!(results.query, "coffee");
    assert_eq!(results.count, 1);
    assert_eq!(results.results[0].id, "3");
}

#[tokio::test]
async fn test_stats_on_seed() {
    let response = app().oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["totalProducts"], 3);
    assert_eq!(body["outOfStockCount"], 1);
    assert_eq!(body["averagePrice"], 683.33);
    assert_eq!(body["categories"], json!({"electronics": 2, "kitchen": 1}));
    assert_eq!(body["priceRange"], json!({"min": 50.0, "max": 1200.0}));
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let response = app().oneshot(get("/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NotFoundError");
    assert_eq!(body["message"], "Product with id 999 not found");
}

#[tokio::test]
async fn test_create_returns_201_with_sanitized_record() {
    let repo = InMemoryProductRepository::seeded();
    let request = with_json(
        "POST",
        "/",
        json!({
            "id": "ignored",
            "name": "  Blender ",
            "description": "Glass jar blender",
            "price": 99.5,
            "category": " KITCHEN ",
            "inStock": false
        }),
    );

    let response = app_with(repo.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_ne!(product.id, "ignored");
    assert_eq!(product.name, "Blender");
    assert_eq!(product.category, "kitchen");
    assert_eq!(repo.count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_create_reports_every_violation() {
    let response = app()
        .oneshot(with_json(
            "POST",
            "/",
            json!({ "name": "Blender", "description": "", "category": "kitchen" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        "Description is required and must be a non-empty string, \
         Price is required and must be a non-negative number, \
         inStock is required and must be a boolean"
    );
}

#[tokio::test]
async fn test_malformed_body_is_invalid_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Invalid JSON");
    assert_eq!(body["message"], "Request body contains invalid JSON");
}

#[tokio::test]
async fn test_update_keeps_id_and_position() {
    let repo = InMemoryProductRepository::seeded();
    let request = with_json(
        "PUT",
        "/2",
        json!({
            "name": "Smartphone",
            "description": "Latest model with 256GB storage",
            "price": 900,
            "category": "electronics",
            "inStock": true
        }),
    );

    let response = app_with(repo.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products = repo.list().await.unwrap();
    assert_eq!(products[1].id, "2");
    assert_eq!(products[1].price, 900.0);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let response = app()
        .oneshot(with_json(
            "PUT",
            "/nope",
            json!({
                "name": "X",
                "description": "Y",
                "price": 1,
                "category": "z",
                "inStock": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_removed_record() {
    let repo = InMemoryProductRepository::seeded();
    let request = Request::builder()
        .method("DELETE")
        .uri("/3")
        .body(Body::empty())
        .unwrap();

    let response = app_with(repo.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let removed: Product = json_body(response.into_body()).await;
    assert_eq!(removed.name, "Coffee Maker");
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_unsupported_method_is_route_not_found() {
    let request = Request::builder()
        .method("PATCH")
        .uri("/1")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Route PATCH /1 not found");
}
