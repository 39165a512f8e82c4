//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{ListQuery, Product, ProductInput, ProductPage, ProductStats, SearchResults};
use crate::query;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validates and sanitizes input, then orchestrates repository calls.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Filtered, paginated listing
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListQuery) -> ProductResult<ProductPage> {
        let products = self.repository.list().await?;
        Ok(query::paginate(products, &query))
    }

    /// Search names and descriptions
    #[instrument(skip(self))]
    pub async fn search_products(&self, q: Option<&str>) -> ProductResult<SearchResults> {
        let products = self.repository.list().await?;
        query::search(products, q)
    }

    /// Aggregate statistics over the whole store
    #[instrument(skip(self))]
    pub async fn product_stats(&self) -> ProductResult<ProductStats> {
        let products = self.repository.list().await?;
        Ok(query::stats(&products))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let new_product = input.into_new_product()?;
        let product = self.repository.create(Product::new(new_product)).await?;
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Replace an existing product, keeping its id
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let new_product = input.into_new_product()?;
        self.repository
            .update(id, new_product)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
