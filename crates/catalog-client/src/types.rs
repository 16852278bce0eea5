//! Catalog record types

use serde::{Deserialize, Serialize};

/// Stable product identifier
pub type ProductId = u64;

/// A product as returned by the catalog
///
/// Fields beyond these are tolerated and dropped on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Display title
    pub title: String,
    /// Long-form description
    #[serde(default)]
    pub description: String,
    /// Category slug (e.g., "smartphones")
    #[serde(default)]
    pub category: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Average rating in 0..=5
    #[serde(default)]
    pub rating: f64,
    /// Image URI, never fetched by the client
    #[serde(default)]
    pub thumbnail: String,
}

/// One page of the catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page, in server order
    pub products: Vec<Product>,
    /// Total number of products the server reports
    pub total: u64,
    /// Offset this page starts at
    #[serde(default)]
    pub skip: u64,
    /// Page size the server applied
    #[serde(default)]
    pub limit: u64,
}
