//! # Session context
//!
//! [`Session`] is handed to views and service clients instead of having each
//! of them read the token from ambient storage. It bundles:
//!
//! - the [`TokenStore`] holding the bearer token,
//! - the [`ClientConfig`] (claim names, privileged name, backend origin),
//! - a [`UsernameCache`] shared by every view for the session's lifetime.
//!
//! Identity is recomputed from the token on every call; nothing about the
//! user is cached here, so logging out takes effect on the next render.

use store::{ClientConfig, TokenStore};

use crate::identity::{resolve_identity, Identity};
use crate::models::Record;
use crate::usernames::UsernameCache;

#[derive(Clone)]
pub struct Session<T> {
    tokens: T,
    config: ClientConfig,
    usernames: UsernameCache,
}

impl<T: TokenStore> Session<T> {
    pub fn new(tokens: T, config: ClientConfig) -> Self {
        Self {
            tokens,
            config,
            usernames: UsernameCache::new(),
        }
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn usernames(&self) -> &UsernameCache {
        &self.usernames
    }

    /// Current identity, decoded from the stored token.
    pub fn identity(&self) -> Identity {
        resolve_identity(&self.tokens, &self.config.session)
    }

    /// Display name of the logged-in user, `None` when anonymous.
    pub fn display_name(&self) -> Option<String> {
        self.identity().display_name
    }

    /// Whether a token is stored, regardless of whether it decodes.
    pub fn has_token(&self) -> bool {
        self.tokens.read().is_some()
    }

    /// Name for the header's "User: ..." label, `None` when no token is
    /// stored. An undecodable token yields an empty name.
    pub fn signed_in_name(&self) -> Option<String> {
        if !self.has_token() {
            return None;
        }
        Some(self.display_name().unwrap_or_default())
    }

    /// Persist a freshly issued token.
    pub fn sign_in(&self, token: &str) {
        self.tokens.write(token);
        tracing::info!("Signed in as {}", self.display_name().unwrap_or_default());
    }

    /// Forget the token and any cached usernames.
    pub fn sign_out(&self) {
        self.tokens.clear();
        self.usernames.clear();
        tracing::info!("Signed out");
    }

    /// Whether edit/delete controls are shown for `record`, whose owner
    /// resolved to `owner_name`.
    pub fn can_modify<R: Record>(&self, record: &R, owner_name: &str) -> bool {
        self.identity()
            .can_modify(record.owner(), Some(owner_name), &self.config.session.admin_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::unsigned_token;
    use crate::models::{Topic, UserId};
    use serde_json::json;
    use store::config::{ID_CLAIM, NAME_CLAIM};
    use store::MemoryTokenStore;

    fn topic(owner: &str) -> Topic {
        Topic {
            id: 1,
            title: "A".to_string(),
            description: String::new(),
            user_id: UserId::from(owner),
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::new(MemoryTokenStore::new(), ClientConfig::default());
        assert!(!session.has_token());
        assert_eq!(session.display_name(), None);

        session.sign_in(&unsigned_token(&json!({ NAME_CLAIM: "alice" })));
        assert!(session.has_token());
        assert_eq!(session.display_name().as_deref(), Some("alice"));

        session.sign_out();
        assert!(!session.has_token());
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn test_signed_in_name_for_unreadable_token_is_empty() {
        let session = Session::new(MemoryTokenStore::with_token("garbage"), ClientConfig::default());
        assert!(session.has_token());
        assert_eq!(session.signed_in_name().as_deref(), Some(""));

        let nameless = MemoryTokenStore::with_token(unsigned_token(&json!({ "sub": "7" })));
        let session = Session::new(nameless, ClientConfig::default());
        assert_eq!(session.signed_in_name().as_deref(), Some("User"));

        let anonymous = Session::new(MemoryTokenStore::new(), ClientConfig::default());
        assert_eq!(anonymous.signed_in_name(), None);
    }

    #[test]
    fn test_identity_follows_token_changes() {
        let tokens = MemoryTokenStore::new();
        let session = Session::new(tokens.clone(), ClientConfig::default());

        tokens.write(&unsigned_token(&json!({ NAME_CLAIM: "bob" })));
        assert_eq!(session.display_name().as_deref(), Some("bob"));

        tokens.write("not-a-token");
        assert_eq!(session.display_name(), None);
        assert!(session.has_token());
    }

    #[test]
    fn test_can_modify_uses_config_admin() {
        let mut config = ClientConfig::default();
        config.session.admin_name = "root".to_string();
        let tokens = MemoryTokenStore::with_token(unsigned_token(&json!({ NAME_CLAIM: "root" })));
        let session = Session::new(tokens, config);

        assert!(session.can_modify(&topic("7"), "alice"));
    }

    #[test]
    fn test_can_modify_by_owner_id() {
        let tokens = MemoryTokenStore::with_token(unsigned_token(
            &json!({ NAME_CLAIM: "alice", ID_CLAIM: "7" }),
        ));
        let session = Session::new(tokens, ClientConfig::default());

        assert!(session.can_modify(&topic("7"), "alice"));
        assert!(!session.can_modify(&topic("8"), "alice"));
    }

    #[test]
    fn test_anonymous_sees_no_controls() {
        let session = Session::new(MemoryTokenStore::new(), ClientConfig::default());
        assert!(!session.can_modify(&topic("7"), "alice"));
    }
}
