//! Storefront catalog client
//!
//! This crate talks to the remote product catalog and the login endpoint.
//! It provides the HTTP plumbing, the product record types, and the
//! `CatalogApi`/`AuthApi` seams the application stores are built on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod catalog;
pub mod http;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use auth::{AuthApi, HttpAuthClient};
pub use catalog::{CatalogApi, HttpCatalogClient};
pub use http::{HttpClient, HttpClientConfig, HttpRequest, HttpResponse};
pub use types::{Product, ProductId, ProductPage};

/// Result type for catalog client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog client operations
///
/// The variants follow how a request failed: no response at all, a
/// well-formed rejection from the server, or a body of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No response was received (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error with status code and message
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },

    /// The response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Check if the remote endpoint could not be reached at all
    pub fn is_network_error(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// HTTP status of a remote rejection, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
