//! In-memory product store

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// Process-local [`ProductRepository`] backed by a locked `Vec`.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Store preloaded with [`seed_products`]
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }
}

/// The three records the service starts with
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::with_id(
            "1",
            NewProduct::sanitized(
                "Laptop",
                "High-performance laptop with 16GB RAM",
                1200.0,
                "electronics",
                true,
            ),
        ),
        Product::with_id(
            "2",
            NewProduct::sanitized(
                "Smartphone",
                "Latest model with 128GB storage",
                800.0,
                "electronics",
                true,
            ),
        ),
        Product::with_id(
            "3",
            NewProduct::sanitized(
                "Coffee Maker",
                "Programmable coffee maker with timer",
                50.0,
                "kitchen",
                false,
            ),
        ),
    ]
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: &str, input: NewProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            product.replace(input);
            product.clone()
        }))
    }

    async fn delete(&self, id: &str) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products
            .iter()
            .position(|p| p.id == id)
            .map(|index| products.remove(index)))
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.products.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> NewProduct {
        NewProduct::sanitized("Lamp", "Desk lamp", 20.0, "home", true)
    }

    #[tokio::test]
    async fn test_seeded_store_has_three_products_in_order() {
        let repo = InMemoryProductRepository::seeded();
        let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_create_appends() {
        let repo = InMemoryProductRepository::seeded();
        let created = repo.create(Product::new(lamp())).await.unwrap();

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(products[3], created);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let repo = InMemoryProductRepository::seeded();
        let updated = repo.update("2", lamp()).await.unwrap().unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Lamp");

        let products = repo.list().await.unwrap();
        assert_eq!(products[1], updated);
        assert_eq!(products.len(), 3);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let repo = InMemoryProductRepository::seeded();
        assert!(repo.update("missing", lamp()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_product() {
        let repo = InMemoryProductRepository::seeded();
        let removed = repo.delete("1").await.unwrap().unwrap();
        assert_eq!(removed.name, "Laptop");
        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.get_by_id("1").await.unwrap().is_none());
        assert!(repo.delete("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let repo = InMemoryProductRepository::new();
        let other = repo.clone();
        other.create(Product::new(lamp())).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
