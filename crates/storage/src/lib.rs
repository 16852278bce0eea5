//! Storage layer for Storefront
//!
//! This crate provides the on-device key-value store and the persisted
//! session token built on top of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod token;

pub use kv::{KvConfig, KvError, KvStore};
pub use token::{TokenStore, SESSION_TOKEN_KEY};
