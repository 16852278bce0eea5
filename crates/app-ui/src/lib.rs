//! User interface for Storefront
//!
//! This crate provides the presentation layer as view models and screen
//! controllers. A rendering backend (the CLI in this workspace) draws what
//! they produce and forwards user events back to them.
//!
//! # Modules
//!
//! - [`theme`] - Light and dark palettes and the theme toggle
//! - [`navigation`] - Routes, session gating, and the navigation stack
//! - [`components`] - Product card, product detail, and search bar models
//! - [`toast`] - Toast notifications
//! - [`screens`] - Product list, product detail, and login screens
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::Route;
//! use app_ui::theme::ThemeState;
//!
//! let theme = ThemeState::from_system(false);
//! assert_eq!(theme.colors.primary, "#6200ee");
//! assert_eq!(Route::ProductDetail { id: 3 }.to_path(), "/product/3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod toast;

// Re-export commonly used types
pub use components::{grid_columns, ProductCard, ProductDetailView, SearchBar};
pub use navigation::{redirect_for, NavigationStack, Route, StackEntry};
pub use screens::{
    sign_out, ErrorBanner, LoginForm, LoginScreen, ProductDetailBody, ProductDetailScreen,
    ProductListScreen, ProductListView,
};
pub use theme::{dark_colors, light_colors, StatusBarStyle, ThemeColors, ThemeName, ThemeState};
pub use toast::{Toast, ToastKind, ToastQueue};
