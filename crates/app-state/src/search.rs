//! Client-side product search
//!
//! The catalog API has no text search, so filtering only ever runs over
//! products that have already been fetched.

use catalog_client::Product;

/// Check whether a product matches a search term
///
/// The term matches when it is a case-insensitive substring of the title or
/// the category. An empty term matches everything.
pub fn matches_search(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.category.to_lowercase().contains(&needle)
}

/// Filter products by a search term, keeping their order
pub fn filter_products<'a>(items: &'a [Product], term: &str) -> Vec<&'a Product> {
    items.iter().filter(|p| matches_search(p, term)).collect()
}
