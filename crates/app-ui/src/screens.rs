//! Screen controllers
//!
//! Each screen owns its local UI state (refresh flag, form fields) and
//! forwards user events to the shared stores. `render` produces
//! a view model for the current state.

use std::sync::Arc;

use app_state::{
    load_product_detail, CatalogStore, FetchOutcome, LoginOutcome, ProductDetailState, SessionStore,
    DEMO_EMAIL, DEMO_PASSWORD,
};
use catalog_client::{CatalogApi, ProductId};
use serde::{Deserialize, Serialize};

use crate::components::{grid_columns, ProductCard, ProductDetailView, SearchBar};
use crate::theme::ThemeState;
use crate::toast::{Toast, ToastQueue};

/// Text shown when a product list has nothing to show
pub const EMPTY_LIST_MESSAGE: &str = "No products found";

/// Text shown when a product fails to load
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found";

// =============================================================================
// Product List
// =============================================================================

/// Error banner above the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBanner {
    /// Error text
    pub message: String,
    /// Retry button label
    pub retry_label: String,
}

/// Everything the product list draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListView {
    /// Search box
    pub search_bar: SearchBar,
    /// Error banner, when the last fetch failed
    pub error: Option<ErrorBanner>,
    /// Cards for the visible products
    pub cards: Vec<ProductCard>,
    /// Grid columns
    pub columns: usize,
    /// Pull-to-refresh indicator
    pub refreshing: bool,
    /// Spinner below the grid
    pub footer_spinner: bool,
    /// Message in place of an empty grid
    pub empty_message: Option<String>,
}

/// Product grid with search, refresh, and infinite scroll
pub struct ProductListScreen {
    catalog: Arc<CatalogStore>,
    refreshing: bool,
}

impl ProductListScreen {
    /// Create the screen over the shared catalog store
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog, refreshing: false }
    }

    /// Screen became visible
    pub async fn on_mount(&self) -> FetchOutcome {
        self.catalog.fetch_first_page().await
    }

    /// Pull-to-refresh
    pub async fn on_refresh(&mut self) -> FetchOutcome {
        self.refreshing = true;
        let outcome = self.catalog.fetch_first_page().await;
        self.refreshing = false;
        outcome
    }

    /// Retry button in the error banner
    pub async fn on_retry(&self) -> FetchOutcome {
        self.catalog.fetch_first_page().await
    }

    /// Search box text changed
    pub fn on_search(&self, text: &str) {
        self.catalog.set_search_term(text);
    }

    /// Whether reaching the end of the grid should load another page
    pub fn can_load_more(&self) -> bool {
        self.catalog.has_more() && !self.catalog.is_loading() && self.catalog.search_term().is_empty()
    }

    /// Scrolled near the end of the grid
    ///
    /// Returns `None` when no page was requested.
    pub async fn on_end_reached(&self) -> Option<FetchOutcome> {
        if !self.can_load_more() {
            return None;
        }
        Some(self.catalog.load_next_page().await)
    }

    /// Current search text
    pub fn search(&self) -> String {
        self.catalog.search_term()
    }

    /// Whether pull-to-refresh is in progress
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Build the view model
    pub fn render(&self, theme: &ThemeState, window_width: f32) -> ProductListView {
        let state = self.catalog.state();
        let cards: Vec<ProductCard> = state.filtered_items().iter().map(ProductCard::from).collect();

        let empty_message = if cards.is_empty() && !state.is_loading {
            Some(EMPTY_LIST_MESSAGE.to_string())
        } else {
            None
        };

        ProductListView {
            search_bar: SearchBar::new(&state.search_term, theme),
            error: state.last_error.map(|message| ErrorBanner {
                message,
                retry_label: "Retry".to_string(),
            }),
            cards,
            columns: grid_columns(window_width),
            refreshing: self.refreshing,
            footer_spinner: state.is_loading,
            empty_message,
        }
    }
}

// =============================================================================
// Product Detail
// =============================================================================

/// What the detail screen draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProductDetailBody {
    /// Centered spinner
    Loading,
    /// Failure message
    NotFound(String),
    /// The product
    Product(ProductDetailView),
}

/// Single product screen
pub struct ProductDetailScreen {
    api: Arc<dyn CatalogApi>,
    id: ProductId,
    state: ProductDetailState,
}

impl ProductDetailScreen {
    /// Create the screen for one product; it starts loading
    pub fn new(api: Arc<dyn CatalogApi>, id: ProductId) -> Self {
        Self { api, id, state: ProductDetailState::Loading }
    }

    /// Fetch the product
    pub async fn load(&mut self) -> &ProductDetailState {
        self.state = load_product_detail(self.api.as_ref(), self.id).await;
        &self.state
    }

    /// Product being shown
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Current state
    pub fn state(&self) -> &ProductDetailState {
        &self.state
    }

    /// Build the view model
    pub fn render(&self) -> ProductDetailBody {
        match &self.state {
            ProductDetailState::Loading => ProductDetailBody::Loading,
            ProductDetailState::NotFound => {
                ProductDetailBody::NotFound(PRODUCT_NOT_FOUND_MESSAGE.to_string())
            }
            ProductDetailState::Loaded(product) => ProductDetailBody::Product(product.into()),
        }
    }
}

// =============================================================================
// Login
// =============================================================================

/// Login form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    /// Email field
    pub email: String,
    /// Password field
    pub password: String,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self { email: DEMO_EMAIL.to_string(), password: DEMO_PASSWORD.to_string() }
    }
}

impl LoginForm {
    /// Whether both fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Login screen
pub struct LoginScreen {
    session: Arc<SessionStore>,
    /// Form fields, prefilled with the demo account
    pub form: LoginForm,
}

impl LoginScreen {
    /// Create the screen over the shared session store
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session, form: LoginForm::default() }
    }

    /// Whether the full-screen loader is shown
    pub fn is_busy(&self) -> bool {
        self.session.is_loading()
    }

    /// Submit the form
    ///
    /// Does nothing when a field is empty. Every result is reported as a
    /// toast; failures are not returned.
    pub async fn submit(&self, toasts: &mut ToastQueue) -> Option<LoginOutcome> {
        if !self.form.is_complete() {
            return None;
        }

        match self.session.login(&self.form.email, &self.form.password).await {
            Ok(outcome) => {
                toasts.push(match outcome {
                    LoginOutcome::Authenticated => Toast::login_success(),
                    LoginOutcome::OfflineDemo => Toast::offline_login(),
                });
                Some(outcome)
            }
            Err(err) => {
                toasts.push(Toast::login_failed(&err.to_string()));
                None
            }
        }
    }
}

/// Header logout button
///
/// Returns whether the session was cleared.
pub async fn sign_out(session: &SessionStore, toasts: &mut ToastQueue) -> bool {
    match session.logout().await {
        Ok(()) => {
            toasts.push(Toast::logged_out());
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "logout failed");
            false
        }
    }
}
