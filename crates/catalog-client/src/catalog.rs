//! Remote product catalog
//!
//! The catalog is paginated by offset/limit and has no text search; all
//! filtering happens client-side over pages already fetched.

use async_trait::async_trait;

use crate::http::{HttpClient, HttpClientConfig, HttpRequest};
use crate::types::{Product, ProductId, ProductPage};
use crate::{Error, Result};

/// Read access to the product catalog
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch `limit` products starting at `skip`
    async fn list_products(&self, skip: u64, limit: u64) -> Result<ProductPage>;

    /// Fetch a single product by id
    async fn get_product(&self, id: ProductId) -> Result<Product>;
}

/// Catalog client backed by the `/products` HTTP endpoints
///
/// # Examples
/// ```no_run
/// use catalog_client::{CatalogApi, HttpCatalogClient, HttpClientConfig};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HttpCatalogClient::new(HttpClientConfig::new("https://dummyjson.com"))?;
///     let page = client.list_products(0, 10).await?;
///     println!("{} of {}", page.products.len(), page.total);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: HttpClient,
}

impl HttpCatalogClient {
    /// Path of the listing endpoint
    pub const PRODUCTS_PATH: &'static str = "products";

    /// Create a catalog client for the given service
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Ok(Self { http: HttpClient::new(config)? })
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_products(&self, skip: u64, limit: u64) -> Result<ProductPage> {
        if limit == 0 {
            return Err(Error::InvalidInput("limit must be positive".to_string()));
        }

        let request = HttpRequest::get(Self::PRODUCTS_PATH)
            .param("limit", limit)
            .param("skip", skip);

        let response = self.http.send::<ProductPage>(request).await?;
        tracing::debug!(
            skip,
            limit,
            received = response.data.products.len(),
            total = response.data.total,
            "catalog page received"
        );
        Ok(response.data)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        let request = HttpRequest::get(format!("{}/{}", Self::PRODUCTS_PATH, id));
        let response = self.http.send::<Product>(request).await?;
        Ok(response.data)
    }
}
