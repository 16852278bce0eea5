//! Persisted session token
//!
//! The session is a single opaque token stored under a fixed key. The copy
//! on disk is the source of truth across restarts.

use std::sync::Arc;

use crate::kv::{KvStore, Result};

/// Key the session token is stored under
pub const SESSION_TOKEN_KEY: &str = "userToken";

/// Token persistence on top of a [`KvStore`]
#[derive(Clone)]
pub struct TokenStore {
    kv: Arc<KvStore>,
}

impl TokenStore {
    /// Create a token store backed by the given key-value store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Read the persisted token
    pub fn load(&self) -> Result<Option<String>> {
        self.kv.get(SESSION_TOKEN_KEY)
    }

    /// Persist a token, replacing any previous one
    pub fn save(&self, token: &str) -> Result<()> {
        self.kv.set(SESSION_TOKEN_KEY, token)?;
        self.kv.flush()
    }

    /// Remove the persisted token, returning whether one was stored
    pub fn clear(&self) -> Result<bool> {
        let removed = self.kv.remove(SESSION_TOKEN_KEY)?;
        self.kv.flush()?;
        Ok(removed)
    }
}
