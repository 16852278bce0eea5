//! Test utilities and fixtures for catalog testing
//!
//! This module provides product fixtures and an in-memory [`CatalogApi`]
//! that downstream crates use in their tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use crate::catalog::CatalogApi;
use crate::types::{Product, ProductId, ProductPage};
use crate::{Error, Result};

/// Product fixtures
pub mod products {
    use super::*;

    /// A product with the given id, title, and category
    pub fn product(id: ProductId, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: format!("Description of {}", title),
            category: category.to_string(),
            price: 10.0 + id as f64,
            rating: 4.5,
            thumbnail: format!("https://cdn.example.com/products/{}/thumbnail.png", id),
        }
    }

    /// `count` products with ids `1..=count`
    pub fn numbered(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|id| product(id, &format!("Product {}", id), "misc"))
            .collect()
    }

    /// "Phone Case" in accessories
    pub fn phone_case() -> Product {
        product(101, "Phone Case", "accessories")
    }

    /// "Laptop" in laptops
    pub fn laptop() -> Product {
        product(102, "Laptop", "laptops")
    }
}

/// In-memory catalog serving a fixed product list
///
/// Records every listing request, can be switched to fail with a network
/// error, and can hold requests until permits are released.
#[derive(Clone, Default)]
pub struct StaticCatalog {
    products: Arc<Mutex<Vec<Product>>>,
    list_calls: Arc<AtomicUsize>,
    requested_skips: Arc<Mutex<Vec<u64>>>,
    failing: Arc<AtomicBool>,
    gate: Option<Arc<Semaphore>>,
}

impl StaticCatalog {
    /// Serve the given products
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: Arc::new(Mutex::new(products)), ..Default::default() }
    }

    /// Hold every listing request until a permit is added to the returned semaphore
    pub fn gated(products: Vec<Product>) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let catalog = Self { gate: Some(Arc::clone(&gate)), ..Self::new(products) };
        (catalog, gate)
    }

    /// Make subsequent requests fail with a network error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Replace the served products
    pub fn set_products(&self, products: Vec<Product>) {
        if let Ok(mut guard) = self.products.lock() {
            *guard = products;
        }
    }

    /// Number of listing requests received
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Offsets of the listing requests received, in order
    pub fn requested_skips(&self) -> Vec<u64> {
        self.requested_skips.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn snapshot(&self) -> Vec<Product> {
        self.products.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CatalogApi for StaticCatalog {
    async fn list_products(&self, skip: u64, limit: u64) -> Result<ProductPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut skips) = self.requested_skips.lock() {
            skips.push(skip);
        }

        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| Error::Network(e.to_string()))?;
            permit.forget();
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Network("Network Error".to_string()));
        }

        let all = self.snapshot();
        let products = all
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(ProductPage { products, total: all.len() as u64, skip, limit })
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Network("Network Error".to_string()));
        }

        self.snapshot()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::Api {
                status: 404,
                message: format!("Product with id '{}' not found", id),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_catalog_pages() {
        let catalog = StaticCatalog::new(products::numbered(25));

        let page = catalog.list_products(20, 10).await.unwrap();
        assert_eq!(page.products.len(), 5);
        assert_eq!(page.total, 25);
        assert_eq!(page.products[0].id, 21);
        assert_eq!(catalog.list_calls(), 1);
        assert_eq!(catalog.requested_skips(), vec![20]);
    }

    #[tokio::test]
    async fn test_static_catalog_failure() {
        let catalog = StaticCatalog::new(products::numbered(3));
        catalog.set_failing(true);

        let err = catalog.list_products(0, 10).await.unwrap_err();
        assert!(err.is_network_error());
    }

    #[tokio::test]
    async fn test_static_catalog_missing_product() {
        let catalog = StaticCatalog::new(products::numbered(3));
        let err = catalog.get_product(99).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
