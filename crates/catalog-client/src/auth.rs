//! Credential exchange against the login endpoint

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::http::{HttpClient, HttpClientConfig, HttpRequest};
use crate::{Error, Result};

/// Message used when the service rejects a login without saying why
pub const LOGIN_FAILED: &str = "Login failed";

/// Remote credential exchange
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange an email/password pair for a session token
    async fn login(&self, email: &str, password: &str) -> Result<String>;
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Login response body
#[derive(Debug, Clone, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Auth client backed by `POST /api/login`
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: HttpClient,
}

impl HttpAuthClient {
    /// Path of the login endpoint
    pub const LOGIN_PATH: &'static str = "api/login";

    /// Create an auth client for the given service
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Ok(Self { http: HttpClient::new(config)? })
    }
}

#[async_trait]
impl AuthApi for HttpAuthClient {
    async fn login(&self, email: &str, password: &str) -> Result<String> {
        let request = HttpRequest::post(Self::LOGIN_PATH)
            .fallback_error(LOGIN_FAILED)
            .json_body(&LoginRequest { email, password })?;

        let response = self.http.send::<LoginResponse>(request).await?;

        match response.data.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(Error::Api { status: response.status, message: LOGIN_FAILED.to_string() }),
        }
    }
}
