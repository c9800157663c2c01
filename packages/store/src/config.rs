//! # Client configuration (`forum.toml`)
//!
//! Defines the TOML configuration bundled with the forum client
//! (filename: [`ClientConfig::filename`] = `"forum.toml"`). It tells the
//! client where the backend lives and how to read the session token.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # backend origin, no trailing slash needed
//!
//! [session]
//! storage_key = "token"                # localStorage key holding the token
//! name_claim = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name"
//! id_claim = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier"
//! admin_name = "admin"                 # display name allowed to edit anything
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers, TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend origin. |
//! | [`SessionConfig`] | Token storage key, the claims read for display, and the privileged name. |
//!
//! Every section and field has a default, so a missing or empty file is
//! equivalent to [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

/// Claim carrying the display name in tokens issued by the forum backend.
pub const NAME_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";

/// Claim carrying the stable user id.
pub const ID_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";

/// Top-level configuration stored in `forum.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the forum REST API, e.g. `"https://forum.example.org"`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// How the session token is stored and interpreted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_name_claim")]
    pub name_claim: String,
    #[serde(default = "default_id_claim")]
    pub id_claim: String,
    /// Display name that may modify every record.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_storage_key() -> String {
    "token".to_string()
}

fn default_name_claim() -> String {
    NAME_CLAIM.to_string()
}

fn default_id_claim() -> String {
    ID_CLAIM.to_string()
}

fn default_admin_name() -> String {
    "admin".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            name_claim: default_name_claim(),
            id_claim: default_id_claim(),
            admin_name: default_admin_name(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            session: SessionConfig::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "forum.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {e}; using defaults", Self::filename());
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Join `path` onto the configured backend origin.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
