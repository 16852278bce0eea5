//! Storefront
//!
//! A paginated product catalog behind a simple token login. This crate wires
//! the workspace together: it builds the remote clients and the on-device
//! store from an [`AppConfig`], constructs every store once, and hands out
//! screens that share them.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront::{AppConfig, Storefront};
//!
//! # async fn run() -> Result<(), storefront::Error> {
//! let app = Storefront::open(AppConfig::from_env()?)?;
//! app.session().restore_session().await?;
//!
//! let screen = app.product_list_screen();
//! screen.on_mount().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;

use std::sync::Arc;

use app_state::{CatalogStore, DemoLoginPolicy, SessionError, SessionStore};
use app_ui::{LoginScreen, ProductDetailScreen, ProductListScreen};
use catalog_client::{AuthApi, CatalogApi, HttpAuthClient, HttpCatalogClient, HttpClientConfig, ProductId};
use storage::{KvConfig, KvError, KvStore, TokenStore};

pub use config::{AppConfig, ConfigError};

/// Errors raised while starting the application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration was invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A remote client could not be built
    #[error("Client error: {0}")]
    Client(#[from] catalog_client::Error),

    /// The on-device store could not be opened
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// The session could not be restored or changed
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Result type for application setup
pub type Result<T> = std::result::Result<T, Error>;

/// The application: shared stores and the services behind them
pub struct Storefront {
    config: AppConfig,
    catalog_api: Arc<dyn CatalogApi>,
    catalog: Arc<CatalogStore>,
    session: Arc<SessionStore>,
}

impl Storefront {
    /// Build HTTP clients and open the on-device store at `config.data_path`
    pub fn open(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let catalog_api = HttpCatalogClient::new(
            HttpClientConfig::new(config.catalog_url.clone()).with_timeout(config.timeout),
        )?;
        let auth_api = HttpAuthClient::new(
            HttpClientConfig::new(config.auth_url.clone()).with_timeout(config.timeout),
        )?;
        let kv = KvStore::open(KvConfig::new(config.data_path.clone()))?;

        tracing::info!(
            catalog_url = %config.catalog_url,
            auth_url = %config.auth_url,
            data_path = %config.data_path.display(),
            "storefront opened"
        );

        Ok(Self::with_services(config, Arc::new(catalog_api), Arc::new(auth_api), Arc::new(kv)))
    }

    /// Assemble the application from already-built services
    pub fn with_services(
        config: AppConfig,
        catalog_api: Arc<dyn CatalogApi>,
        auth_api: Arc<dyn AuthApi>,
        kv: Arc<KvStore>,
    ) -> Self {
        let policy = if config.demo_login_fallback {
            DemoLoginPolicy::demo()
        } else {
            DemoLoginPolicy::disabled()
        };

        let catalog = Arc::new(CatalogStore::with_page_size(Arc::clone(&catalog_api), config.page_size));
        let session = Arc::new(SessionStore::new(auth_api, TokenStore::new(kv), policy));

        Self { config, catalog_api, catalog, session }
    }

    /// Configuration in effect
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared catalog store
    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    /// Shared session store
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Product grid screen over the shared catalog
    pub fn product_list_screen(&self) -> ProductListScreen {
        ProductListScreen::new(Arc::clone(&self.catalog))
    }

    /// Detail screen for one product
    pub fn product_detail_screen(&self, id: ProductId) -> ProductDetailScreen {
        ProductDetailScreen::new(Arc::clone(&self.catalog_api), id)
    }

    /// Login screen over the shared session
    pub fn login_screen(&self) -> LoginScreen {
        LoginScreen::new(Arc::clone(&self.session))
    }
}
