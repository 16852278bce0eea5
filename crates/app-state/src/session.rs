//! Session state management
//!
//! The session is an opaque token obtained from the login endpoint and
//! persisted on device. The persisted copy is authoritative: it is read once
//! at startup by [`SessionStore::restore_session`] and rewritten on every
//! login and logout.
//!
//! # Offline demo login
//!
//! When the login endpoint cannot be reached at all and the supplied
//! credentials are the fixed demo pair, [`DemoLoginPolicy`] lets the store
//! persist a placeholder token and report success. Remote rejections are
//! never downgraded. Builds that must not carry this behavior construct the
//! store with [`DemoLoginPolicy::disabled`].

use catalog_client::AuthApi;
use parking_lot::RwLock;
use std::sync::Arc;
use storage::{KvError, TokenStore};

/// Demo account email
pub const DEMO_EMAIL: &str = "eve.holt@reqres.in";

/// Demo account password
pub const DEMO_PASSWORD: &str = "cityslicka";

/// Placeholder token persisted by an offline demo login
pub const DEMO_TOKEN: &str = "QpwL5tke4Pnpja7X4Mock";

/// Session-related errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The login endpoint answered and refused the credentials
    #[error("{0}")]
    Rejected(String),

    /// The login endpoint could not be reached or answered garbage
    #[error(transparent)]
    Remote(catalog_client::Error),

    /// Reading or writing the persisted token failed
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Email or password was empty
    #[error("Email and password are required")]
    MissingCredentials,
}

impl From<catalog_client::Error> for SessionError {
    fn from(err: catalog_client::Error) -> Self {
        match err {
            catalog_client::Error::Api { message, .. } => SessionError::Rejected(message),
            other => SessionError::Remote(other),
        }
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// How a successful login was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The login endpoint issued a token
    Authenticated,
    /// The endpoint was unreachable and the demo placeholder token was used
    OfflineDemo,
}

/// Credentials accepted for the offline demo login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCredentials {
    /// Email that must match exactly
    pub email: String,
    /// Password that must match exactly
    pub password: String,
    /// Token persisted on fallback
    pub token: String,
}

/// Policy for logins attempted while the login endpoint is unreachable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoLoginPolicy {
    credentials: Option<DemoCredentials>,
}

impl Default for DemoLoginPolicy {
    fn default() -> Self {
        Self::demo()
    }
}

impl DemoLoginPolicy {
    /// Accept the fixed demo pair with the placeholder token
    pub fn demo() -> Self {
        Self {
            credentials: Some(DemoCredentials {
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
                token: DEMO_TOKEN.to_string(),
            }),
        }
    }

    /// Never fall back; network failures propagate
    pub fn disabled() -> Self {
        Self { credentials: None }
    }

    /// Whether a fallback pair is configured
    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    /// Placeholder token for these credentials, if they are the demo pair
    pub fn fallback_token(&self, email: &str, password: &str) -> Option<&str> {
        self.credentials
            .as_ref()
            .filter(|c| c.email == email && c.password == password)
            .map(|c| c.token.as_str())
    }
}

/// Observable session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Current token, if signed in
    pub token: Option<String>,
    /// True until the persisted session is restored, and during login/logout
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { token: None, is_loading: true }
    }
}

/// Session store
pub struct SessionStore {
    auth: Arc<dyn AuthApi>,
    tokens: TokenStore,
    policy: DemoLoginPolicy,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Create a session store; call [`SessionStore::restore_session`] next
    pub fn new(auth: Arc<dyn AuthApi>, tokens: TokenStore, policy: DemoLoginPolicy) -> Self {
        Self { auth, tokens, policy, state: RwLock::new(SessionState::default()) }
    }

    /// Load the persisted token into memory
    ///
    /// Loading ends whether or not the read succeeds.
    pub async fn restore_session(&self) -> Result<Option<String>> {
        let restored = self.tokens.load();
        let mut state = self.state.write();
        state.is_loading = false;

        match restored {
            Ok(token) => {
                tracing::info!(signed_in = token.is_some(), "session restored");
                state.token = token.clone();
                Ok(token)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to restore session");
                Err(err.into())
            }
        }
    }

    /// Exchange credentials for a token and persist it
    ///
    /// Returns [`SessionError::Rejected`] when the endpoint refuses the
    /// credentials. A network failure is downgraded to
    /// [`LoginOutcome::OfflineDemo`] only when the policy accepts the pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }

        tracing::debug!(email, "attempting login");
        self.state.write().is_loading = true;
        let result = self.exchange(email, password).await;
        self.state.write().is_loading = false;
        result
    }

    async fn exchange(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        match self.auth.login(email, password).await {
            Ok(token) => {
                self.persist(&token)?;
                tracing::info!("login successful");
                Ok(LoginOutcome::Authenticated)
            }
            Err(err) if err.is_network_error() => {
                match self.policy.fallback_token(email, password) {
                    Some(token) => {
                        tracing::warn!(error = %err, "login endpoint unreachable, using demo access");
                        self.persist(token)?;
                        Ok(LoginOutcome::OfflineDemo)
                    }
                    None => {
                        tracing::error!(error = %err, "login failed");
                        Err(err.into())
                    }
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "login failed");
                Err(err.into())
            }
        }
    }

    fn persist(&self, token: &str) -> Result<()> {
        self.tokens.save(token)?;
        self.state.write().token = Some(token.to_string());
        Ok(())
    }

    /// Clear the persisted token and sign out
    pub async fn logout(&self) -> Result<()> {
        self.state.write().is_loading = true;
        let cleared = self.tokens.clear();

        let mut state = self.state.write();
        state.is_loading = false;
        match cleared {
            Ok(_) => {
                state.token = None;
                tracing::info!("logged out");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to clear session");
                Err(err.into())
            }
        }
    }

    /// Current token, if signed in
    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Whether a token is held
    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    /// Whether a restore, login, or logout is in progress
    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    /// Snapshot of the session state
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// The demo login policy in effect
    pub fn policy(&self) -> &DemoLoginPolicy {
        &self.policy
    }
}
