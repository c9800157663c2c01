//! # Token store
//!
//! The forum backend hands out a bearer token at login. The client keeps it
//! in persistent storage under a fixed key and reads it back whenever it
//! needs to know who is logged in or to authorise a request.
//!
//! [`TokenStore`] is deliberately tiny: read, write, clear. It never looks
//! inside the token. Decoding happens in the `api` crate.
//!
//! Implementations:
//!
//! | Type | Backing | Used by |
//! |------|---------|---------|
//! | [`crate::MemoryTokenStore`] | `Arc<Mutex<Option<String>>>` | tests, native previews |
//! | `LocalTokenStore` | browser `localStorage` | the web app |
//!
//! Storage failures are logged and swallowed. A store that cannot be read
//! behaves like an anonymous session.

use std::fmt::Debug;

/// Persistent slot holding the current session token, if any.
pub trait TokenStore {
    /// Returns the persisted token, or `None` when anonymous.
    fn read(&self) -> Option<String>;

    /// Persists `token`, replacing any previous one.
    fn write(&self, token: &str);

    /// Removes the persisted token.
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for std::rc::Rc<T> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, token: &str) {
        (**self).write(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Unwrap a storage call, logging a failure at `warn` as "Failed to {action}".
#[cfg_attr(not(all(target_arch = "wasm32", feature = "web")), allow(dead_code))]
pub(crate) fn log_failure<T, E: Debug>(result: Result<T, E>, action: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to {}: {:?}", action, e);
            None
        }
    }
}
