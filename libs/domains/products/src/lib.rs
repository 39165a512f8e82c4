//! Products Domain
//!
//! Catalogue of products held in memory, with filtering, pagination, search
//! and aggregate statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │ Repository  │     │    Query    │  ← Pure list/search/stats
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Memory    │  ← Locked in-process store
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::seeded();
//! let service = ProductService::new(repository);
//!
//! // Nest under /api/products
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::{seed_products, InMemoryProductRepository};
pub use models::{
    ListQuery, NewProduct, Pagination, PriceRange, Product, ProductInput, ProductPage,
    ProductStats, SearchQuery, SearchResults,
};
pub use repository::ProductRepository;
pub use service::ProductService;
