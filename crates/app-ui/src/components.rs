//! UI component view models
//!
//! Components are plain data computed from products and theme state. A
//! rendering backend draws them; nothing here touches a toolkit.

use catalog_client::{Product, ProductId};
use serde::{Deserialize, Serialize};

use crate::theme::{Color, ThemeState};

// =============================================================================
// Grid Layout
// =============================================================================

/// Window width at which the product grid widens
pub const WIDE_LAYOUT_BREAKPOINT: f32 = 768.0;

/// Number of grid columns for a window width
pub fn grid_columns(window_width: f32) -> usize {
    if window_width < WIDE_LAYOUT_BREAKPOINT {
        3
    } else {
        6
    }
}

/// Format a rating for display
pub fn rating_label(rating: f64) -> String {
    format!("★ {}", rating)
}

// =============================================================================
// Product Card
// =============================================================================

/// A product tile in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Product ID, used as the list key and for navigation
    pub id: ProductId,
    /// Title, shown on one line
    pub title: String,
    /// Description, shown on two lines
    pub description: String,
    /// Category badge text
    pub category_badge: String,
    /// Rating label
    pub rating: String,
    /// Price label with two decimals
    pub price: String,
    /// Thumbnail URL
    pub thumbnail: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            category_badge: product.category.to_uppercase(),
            rating: rating_label(product.rating),
            price: format!("${:.2}", product.price),
            thumbnail: product.thumbnail.clone(),
        }
    }
}

// =============================================================================
// Product Detail
// =============================================================================

/// The product detail body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetailView {
    /// Title
    pub title: String,
    /// Rating label
    pub rating: String,
    /// Price label, plain number formatting
    pub price: String,
    /// Upper-cased category
    pub category: String,
    /// Full description
    pub description: String,
    /// Thumbnail URL
    pub thumbnail: String,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            rating: rating_label(product.rating),
            price: format!("${}", product.price),
            category: product.category.to_uppercase(),
            description: product.description.clone(),
            thumbnail: product.thumbnail.clone(),
        }
    }
}

// =============================================================================
// Search Bar
// =============================================================================

/// Default search placeholder
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// The search box above the product grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBar {
    /// Current text
    pub value: String,
    /// Placeholder text
    pub placeholder: String,
    /// Placeholder color for the active theme
    pub placeholder_color: Color,
    /// Whether the clear button is shown
    pub show_clear: bool,
}

impl SearchBar {
    /// Build the search bar for the current text and theme
    pub fn new(value: &str, theme: &ThemeState) -> Self {
        Self {
            value: value.to_string(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            placeholder_color: theme.placeholder_color().to_string(),
            show_clear: !value.is_empty(),
        }
    }
}
