use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// The store is an ordered sequence: `create` appends, `update` replaces in
/// place and `delete` removes, so listings keep insertion order. Each call is
/// atomic with respect to the others.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Snapshot of every product, in store order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Append a product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Replace every field but the id. `None` when the id is unknown.
    async fn update(&self, id: &str, input: NewProduct) -> ProductResult<Option<Product>>;

    /// Remove a product, returning it. `None` when the id is unknown.
    async fn delete(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}
