//! Navigation system for Storefront
//!
//! Routes, session gating, and a navigation stack of screens.

use app_state::SessionState;
use catalog_client::ProductId;
use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Login screen
    Login,
    /// Product grid
    #[default]
    Products,
    /// Single product
    ProductDetail {
        /// Product ID
        id: ProductId,
    },
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Products => "/".to_string(),
            Route::ProductDetail { id } => format!("/product/{}", id),
        }
    }

    /// Match a path to a route
    pub fn from_path(path: &str) -> Option<Route> {
        let pathname = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Products),
            ["login"] => Some(Route::Login),
            ["product", id] => id.parse().ok().map(|id| Route::ProductDetail { id }),
            _ => None,
        }
    }

    /// Whether the route is only reachable with a session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Products => "Products",
            Route::ProductDetail { .. } => "Product Details",
        }
    }
}

// =============================================================================
// Session Gating
// =============================================================================

/// Where a route should redirect given the session
///
/// Returns `None` while the session is still loading, and when the route may
/// be shown as is.
pub fn redirect_for(route: &Route, session: &SessionState) -> Option<Route> {
    if session.is_loading {
        return None;
    }

    let signed_in = session.token.is_some();
    if signed_in && *route == Route::Login {
        Some(Route::Products)
    } else if !signed_in && route.requires_auth() {
        Some(Route::Login)
    } else {
        None
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self { route, key: uuid::Uuid::new_v4().to_string() }
    }
}

/// Screen history, bottom to top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    root: StackEntry,
    entries: Vec<StackEntry>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self { root: StackEntry::new(root), entries: Vec::new() }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.entries.pop().is_some()
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.clear();
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        match self.entries.last_mut() {
            Some(last) => *last = StackEntry::new(route),
            None => self.root = StackEntry::new(route),
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().unwrap_or(&self.root)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len() + 1
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.root = StackEntry::new(route);
        self.entries.clear();
    }

    /// Apply session gating to the current route
    ///
    /// A redirect resets the stack so the previous screens cannot be
    /// reached with back navigation. Returns the redirect target, if any.
    pub fn apply_gate(&mut self, session: &SessionState) -> Option<Route> {
        let target = redirect_for(self.current(), session)?;
        tracing::debug!(from = %self.current().to_path(), to = %target.to_path(), "redirecting");
        self.reset(target.clone());
        Some(target)
    }
}
