//! Product catalog store
//!
//! Holds the accumulated product list, the pagination cursor, loading and
//! error flags, and the active search term. The presentation layer drives it
//! through explicit commands and reads snapshots back.
//!
//! # State transitions
//!
//! - [`CatalogStore::fetch_first_page`] replaces the list with page 0.
//! - [`CatalogStore::load_next_page`] appends the next page, skipping ids
//!   already present.
//! - [`CatalogStore::set_search_term`] only changes the derived filtered view.
//!
//! At most one fetch is in flight. A command issued while one is pending
//! returns [`FetchOutcome::Skipped`] without touching state. Failures are
//! recorded in `last_error`; previously loaded products stay visible.

use catalog_client::{CatalogApi, Product, ProductId};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

use crate::search::filter_products;

/// Default number of products per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const FALLBACK_FETCH_ERROR: &str = "Failed to fetch products";

/// What a fetch command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Another fetch was in flight, or there was nothing more to load
    Skipped,
    /// The page was merged; `added` products were new
    Loaded {
        /// Number of products added to the list
        added: usize,
    },
    /// The request failed and `last_error` was set
    Failed,
}

/// Observable catalog state
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Products in arrival order, unique by id
    pub items: Vec<Product>,
    /// Number of pages already fetched
    pub page_cursor: u32,
    /// Whether the server reported more products beyond the last page
    pub has_more: bool,
    /// Whether a fetch is in flight
    pub is_loading: bool,
    /// Message from the last failed fetch
    pub last_error: Option<String>,
    /// Active search term
    pub search_term: String,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_cursor: 0,
            has_more: true,
            is_loading: false,
            last_error: None,
            search_term: String::new(),
        }
    }
}

impl CatalogState {
    /// Products matching the current search term, in list order
    pub fn filtered_items(&self) -> Vec<Product> {
        filter_products(&self.items, &self.search_term)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct Inner {
    state: CatalogState,
    ids: HashSet<ProductId>,
}

impl Inner {
    fn replace_items(&mut self, products: Vec<Product>) -> usize {
        self.state.items.clear();
        self.ids.clear();
        self.append_new(products)
    }

    fn append_new(&mut self, products: Vec<Product>) -> usize {
        let before = self.state.items.len();
        for product in products {
            if self.ids.insert(product.id) {
                self.state.items.push(product);
            }
        }
        self.state.items.len() - before
    }
}

/// Which kind of fetch is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Refresh,
    NextPage,
}

/// Catalog store backed by a [`CatalogApi`]
///
/// # Examples
/// ```no_run
/// use app_state::CatalogStore;
/// use catalog_client::{HttpCatalogClient, HttpClientConfig};
/// use std::sync::Arc;
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let api = HttpCatalogClient::new(HttpClientConfig::new("https://dummyjson.com"))?;
///     let store = CatalogStore::new(Arc::new(api));
///
///     store.fetch_first_page().await;
///     store.set_search_term("phone");
///     for product in store.filtered_items() {
///         println!("{}", product.title);
///     }
///     Ok(())
/// }
/// ```
pub struct CatalogStore {
    api: Arc<dyn CatalogApi>,
    page_size: u32,
    inner: RwLock<Inner>,
}

impl CatalogStore {
    /// Create an empty store with the default page size
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    /// Create an empty store with a custom page size (minimum 1)
    pub fn with_page_size(api: Arc<dyn CatalogApi>, page_size: u32) -> Self {
        Self { api, page_size: page_size.max(1), inner: RwLock::new(Inner::default()) }
    }

    /// Page size requested from the catalog
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Reload from the first page, replacing the current list
    ///
    /// A no-op while another fetch is in flight. On failure the existing
    /// products are kept and `last_error` is set.
    pub async fn fetch_first_page(&self) -> FetchOutcome {
        let skip = {
            let mut inner = self.inner.write();
            if inner.state.is_loading {
                tracing::debug!("refresh skipped: fetch already in flight");
                return FetchOutcome::Skipped;
            }
            inner.state.is_loading = true;
            inner.state.last_error = None;
            inner.state.page_cursor = 0;
            inner.state.has_more = true;
            0
        };

        self.run_fetch(FetchKind::Refresh, skip).await
    }

    /// Load the page after the last one fetched and append its new products
    ///
    /// A no-op while another fetch is in flight or once the catalog is
    /// exhausted; only [`CatalogStore::fetch_first_page`] re-arms it.
    pub async fn load_next_page(&self) -> FetchOutcome {
        let skip = {
            let mut inner = self.inner.write();
            if inner.state.is_loading || !inner.state.has_more {
                tracing::debug!(
                    is_loading = inner.state.is_loading,
                    has_more = inner.state.has_more,
                    "load more skipped"
                );
                return FetchOutcome::Skipped;
            }
            inner.state.is_loading = true;
            inner.state.last_error = None;
            u64::from(inner.state.page_cursor) * u64::from(self.page_size)
        };

        self.run_fetch(FetchKind::NextPage, skip).await
    }

    async fn run_fetch(&self, kind: FetchKind, skip: u64) -> FetchOutcome {
        let limit = u64::from(self.page_size);
        tracing::debug!(?kind, skip, limit, "fetching catalog page");

        let result = self.api.list_products(skip, limit).await;

        let mut inner = self.inner.write();
        let outcome = match result {
            Ok(page) => {
                let added = match kind {
                    FetchKind::Refresh => {
                        let added = inner.replace_items(page.products);
                        inner.state.page_cursor = 1;
                        added
                    }
                    FetchKind::NextPage => {
                        let added = inner.append_new(page.products);
                        inner.state.page_cursor += 1;
                        added
                    }
                };
                inner.state.has_more = skip + limit < page.total;
                tracing::debug!(
                    added,
                    total_loaded = inner.state.items.len(),
                    reported_total = page.total,
                    has_more = inner.state.has_more,
                    "catalog page merged"
                );
                FetchOutcome::Loaded { added }
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(error = %message, ?kind, "catalog fetch failed");
                inner.state.last_error = Some(if message.is_empty() {
                    FALLBACK_FETCH_ERROR.to_string()
                } else {
                    message
                });
                FetchOutcome::Failed
            }
        };
        inner.state.is_loading = false;
        outcome
    }

    /// Replace the search term; never touches the network or the list
    pub fn set_search_term(&self, term: impl Into<String>) {
        self.inner.write().state.search_term = term.into();
    }

    /// Products matching the current search term, recomputed on every call
    pub fn filtered_items(&self) -> Vec<Product> {
        self.inner.read().state.filtered_items()
    }

    /// Snapshot of the whole state
    pub fn state(&self) -> CatalogState {
        self.inner.read().state.clone()
    }

    /// All loaded products, unfiltered
    pub fn items(&self) -> Vec<Product> {
        self.inner.read().state.items.clone()
    }

    /// Number of loaded products
    pub fn len(&self) -> usize {
        self.inner.read().state.items.len()
    }

    /// Whether no products are loaded
    pub fn is_empty(&self) -> bool {
        self.inner.read().state.items.is_empty()
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.inner.read().state.is_loading
    }

    /// Whether more pages are available
    pub fn has_more(&self) -> bool {
        self.inner.read().state.has_more
    }

    /// Number of pages already fetched
    pub fn page_cursor(&self) -> u32 {
        self.inner.read().state.page_cursor
    }

    /// Message from the last failed fetch
    pub fn last_error(&self) -> Option<String> {
        self.inner.read().state.last_error.clone()
    }

    /// Active search term
    pub fn search_term(&self) -> String {
        self.inner.read().state.search_term.clone()
    }
}
