//! # `localStorage` token store
//!
//! [`LocalTokenStore`] is the [`TokenStore`] used on the **web platform**.
//! It keeps the session token in `window.localStorage` under a single key
//! (default `"token"`, configurable through `[session] storage_key`).
//!
//! `localStorage` access is synchronous and atomic per call, so the store
//! needs no locking. The `Storage` handle is looked up on every call, so the
//! store itself is a plain `Clone` value holding only the key.
//!
//! Failures (no window, storage disabled, quota exceeded) are logged at
//! `warn` and otherwise ignored: reads degrade to an anonymous session.

use web_sys::Storage;

use crate::token::{log_failure, TokenStore};

/// `localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    /// Create a store reading and writing `localStorage[key]`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl TokenStore for LocalTokenStore {
    fn read(&self) -> Option<String> {
        let storage = Self::storage()?;
        log_failure(storage.get_item(&self.key), "read session token").flatten()
    }

    fn write(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        log_failure(storage.set_item(&self.key, token), "persist session token");
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        log_failure(storage.remove_item(&self.key), "remove session token");
    }
}
