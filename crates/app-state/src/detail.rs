//! Product detail loading

use catalog_client::{CatalogApi, Product, ProductId};

/// State of the product detail view
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetailState {
    /// Request in flight
    Loading,
    /// Product loaded
    Loaded(Product),
    /// The product could not be loaded
    NotFound,
}

impl ProductDetailState {
    /// The loaded product, if any
    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductDetailState::Loaded(product) => Some(product),
            _ => None,
        }
    }
}

/// Fetch one product for the detail view
///
/// Any failure, including a network error, is logged and reported as
/// [`ProductDetailState::NotFound`].
pub async fn load_product_detail(api: &dyn CatalogApi, id: ProductId) -> ProductDetailState {
    match api.get_product(id).await {
        Ok(product) => ProductDetailState::Loaded(product),
        Err(err) => {
            tracing::error!(id, error = %err, "failed to fetch product details");
            ProductDetailState::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::test_utils::{products, StaticCatalog};

    #[tokio::test]
    async fn test_loads_existing_product() {
        let catalog = StaticCatalog::new(vec![products::laptop()]);
        let state = load_product_detail(&catalog, 102).await;
        assert_eq!(state.product().map(|p| p.title.as_str()), Some("Laptop"));
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let catalog = StaticCatalog::new(vec![products::laptop()]);
        assert_eq!(load_product_detail(&catalog, 7).await, ProductDetailState::NotFound);
    }

    #[tokio::test]
    async fn test_network_failure_is_not_found() {
        let catalog = StaticCatalog::new(vec![products::laptop()]);
        catalog.set_failing(true);
        assert_eq!(load_product_detail(&catalog, 102).await, ProductDetailState::NotFound);
    }
}
