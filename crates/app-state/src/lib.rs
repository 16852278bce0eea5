//! Application state for Storefront
//!
//! This crate holds the stores the presentation layer observes: the product
//! catalog with its pagination and search state, the authenticated session,
//! and product detail loading. Stores are plain objects constructed once and
//! shared by handle; nothing here is global.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod detail;
pub mod search;
pub mod session;

pub use catalog::{CatalogState, CatalogStore, FetchOutcome, DEFAULT_PAGE_SIZE};
pub use detail::{load_product_detail, ProductDetailState};
pub use search::{filter_products, matches_search};
pub use session::{
    DemoCredentials, DemoLoginPolicy, LoginOutcome, SessionError, SessionState, SessionStore, DEMO_EMAIL,
    DEMO_PASSWORD, DEMO_TOKEN,
};
