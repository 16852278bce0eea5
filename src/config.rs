//! Application configuration
//!
//! Defaults point at the public demo services. Every field can be
//! overridden from the environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `STOREFRONT_CATALOG_URL` | `catalog_url` |
//! | `STOREFRONT_AUTH_URL` | `auth_url` |
//! | `STOREFRONT_PAGE_SIZE` | `page_size` |
//! | `STOREFRONT_DATA_PATH` | `data_path` |
//! | `STOREFRONT_DEMO_LOGIN` | `demo_login_fallback` |

use std::path::PathBuf;
use std::time::Duration;

use app_state::DEFAULT_PAGE_SIZE;

/// Default catalog service
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

/// Default login service
pub const DEFAULT_AUTH_URL: &str = "https://reqres.in";

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A value could not be parsed or is out of range
    #[error("Invalid value for {key}: {message}")]
    Invalid {
        /// Environment variable or field name
        key: String,
        /// What was wrong
        message: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        ConfigError::Invalid { key: key.to_string(), message: message.into() }
    }
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the catalog service
    pub catalog_url: String,
    /// Base URL of the login service
    pub auth_url: String,
    /// Products per page
    pub page_size: u32,
    /// Request timeout for both services
    pub timeout: Duration,
    /// Directory of the on-device key-value store
    pub data_path: PathBuf,
    /// Accept the demo account when the login service is unreachable
    pub demo_login_fallback: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(30),
            data_path: PathBuf::from("storefront_data"),
            demo_login_fallback: true,
        }
    }
}

impl AppConfig {
    /// Set the catalog service URL
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    /// Set the login service URL
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the storage directory
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Enable or disable the offline demo login
    pub fn with_demo_login_fallback(mut self, enabled: bool) -> Self {
        self.demo_login_fallback = enabled;
        self
    }

    /// Defaults with overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("STOREFRONT_CATALOG_URL") {
            tracing::debug!(url = %url, "overriding catalog URL from environment");
            config.catalog_url = url;
        }

        if let Some(url) = lookup("STOREFRONT_AUTH_URL") {
            tracing::debug!(url = %url, "overriding auth URL from environment");
            config.auth_url = url;
        }

        if let Some(size) = lookup("STOREFRONT_PAGE_SIZE") {
            config.page_size = size
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("STOREFRONT_PAGE_SIZE", format!("'{}' is not a number", size)))?;
        }

        if let Some(path) = lookup("STOREFRONT_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }

        if let Some(flag) = lookup("STOREFRONT_DEMO_LOGIN") {
            config.demo_login_fallback = parse_flag(&flag)
                .ok_or_else(|| ConfigError::invalid("STOREFRONT_DEMO_LOGIN", format!("'{}' is not a boolean", flag)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ConfigError::invalid("page_size", "must be greater than 0"));
        }
        if self.catalog_url.is_empty() {
            return Err(ConfigError::invalid("catalog_url", "must not be empty"));
        }
        if self.auth_url.is_empty() {
            return Err(ConfigError::invalid("auth_url", "must not be empty"));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_url, "https://dummyjson.com");
        assert_eq!(config.auth_url, "https://reqres.in");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.demo_login_fallback);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STOREFRONT_CATALOG_URL", "http://localhost:8080"),
            ("STOREFRONT_AUTH_URL", "http://localhost:8081"),
            ("STOREFRONT_PAGE_SIZE", "25"),
            ("STOREFRONT_DATA_PATH", "/tmp/storefront"),
            ("STOREFRONT_DEMO_LOGIN", "off"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_url, "http://localhost:8080");
        assert_eq!(config.auth_url, "http://localhost:8081");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.data_path, PathBuf::from("/tmp/storefront"));
        assert!(!config.demo_login_fallback);
    }

    #[test]
    fn test_invalid_page_size() {
        let err = AppConfig::from_lookup(lookup(&[("STOREFRONT_PAGE_SIZE", "ten")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "STOREFRONT_PAGE_SIZE"));

        let err = AppConfig::from_lookup(lookup(&[("STOREFRONT_PAGE_SIZE", "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_invalid_demo_flag() {
        assert!(AppConfig::from_lookup(lookup(&[("STOREFRONT_DEMO_LOGIN", "maybe")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("STOREFRONT_DEMO_LOGIN", "TRUE")])).unwrap().demo_login_fallback);
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_catalog_url("http://catalog")
            .with_auth_url("http://auth")
            .with_page_size(5)
            .with_timeout(Duration::from_secs(2))
            .with_data_path("data")
            .with_demo_login_fallback(false);

        assert_eq!(config.catalog_url, "http://catalog");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert!(!config.demo_login_fallback);
        assert!(config.with_page_size(0).validate().is_err());
    }
}
