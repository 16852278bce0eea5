//! HTTP client implementation
//!
//! This module implements the JSON-over-HTTP plumbing shared by the catalog
//! and auth clients: request/response types, client configuration, and the
//! mapping from transport and status failures to [`Error`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::{Error, Result};

// =============================================================================
// Request Types
// =============================================================================

/// HTTP method for catalog requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request (listings, detail)
    Get,
    /// POST request (login)
    Post,
}

impl HttpMethod {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// HTTP request parameters
///
/// Represents a request relative to the client's base URL with method, path,
/// headers, query parameters, and optional body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL (e.g., "products/1")
    pub path: String,
    /// Query parameters, sent in insertion order
    pub params: Vec<(String, String)>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (for POST)
    pub body: Option<Vec<u8>>,
    /// Encoding type (e.g., "application/json")
    pub encoding: Option<String>,
    /// Message used when a rejection carries no error text
    pub fallback_error: Option<String>,
}

impl HttpRequest {
    /// Create a new GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            params: Vec::new(),
            headers: HashMap::new(),
            body: None,
            encoding: None,
            fallback_error: None,
        }
    }

    /// Create a new POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            params: Vec::new(),
            headers: HashMap::new(),
            body: None,
            encoding: Some("application/json".to_string()),
            fallback_error: None,
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the message reported when a rejection body has no error text
    pub fn fallback_error(mut self, message: impl Into<String>) -> Self {
        self.fallback_error = Some(message.into());
        self
    }

    /// Set the request body from JSON
    pub fn json_body<T: Serialize>(mut self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(|e| Error::InvalidInput(e.to_string()))?;
        self.body = Some(body);
        self.encoding = Some("application/json".to_string());
        Ok(self)
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Decoded HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Response data
    pub data: T,
}

impl<T> HttpResponse<T> {
    /// Create a new response
    pub fn new(status: u16, data: T) -> Self {
        Self { status, data }
    }

    /// Check if the response is successful (2xx status)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Error body returned by the remote services
///
/// The login service uses `error`, the catalog uses `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error text (login service)
    #[serde(default)]
    pub error: Option<String>,
    /// Error text (catalog service)
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The most specific message carried by the body
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.is_empty())
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base service URL (e.g., "https://dummyjson.com")
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("Storefront/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Default::default() }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// HTTP Client Implementation
// =============================================================================

use reqwest::{Client as ReqwestClient, Response as ReqwestResponse};

/// JSON HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::InvalidInput(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Execute a request and decode a JSON body
    pub async fn send<T>(&self, request: HttpRequest) -> Result<HttpResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url_for(&request.path);
        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let mut req = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        if !request.params.is_empty() {
            req = req.query(&request.params);
        }

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        for (key, value) in &request.headers {
            req = req.header(key, value);
        }

        if let Some(body) = request.body {
            if let Some(encoding) = &request.encoding {
                req = req.header("Content-Type", encoding);
            }
            req = req.body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request failed: {}", e)))?;

        self.parse_response(response, request.fallback_error).await
    }

    /// Parse reqwest response into HttpResponse
    async fn parse_response<T>(
        &self,
        response: ReqwestResponse,
        fallback_error: Option<String>,
    ) -> Result<HttpResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response: {}", e)))?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.text().map(str::to_string))
                .or(fallback_error)
                .unwrap_or_else(|| format!("HTTP {}", status));
            tracing::warn!(status, %message, "request rejected");
            return Err(Error::Api { status, message });
        }

        let data: T = serde_json::from_str(&body)
            .map_err(|e| Error::Malformed(format!("Failed to parse JSON: {}", e)))?;

        Ok(HttpResponse::new(status, data))
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
