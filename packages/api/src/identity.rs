//! # Identity resolver
//!
//! The session token is a compact JWT (`header.payload.signature`). The client
//! only ever reads the payload, and only for display: there is no signature
//! check here, so an [`Identity`] must never be used as an authentication
//! decision. The backend stays the authority on what a request may do.
//!
//! ## Rules
//!
//! - No stored token: anonymous, and no decode is attempted.
//! - A token that does not decode (wrong number of parts, payload not
//!   base64url, payload not a JSON object) is logged and treated as anonymous.
//! - A decodable token without the name claim resolves to [`DEFAULT_DISPLAY_NAME`].
//!   The fallback only ever applies when a token exists.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde_json::{Map, Value};
use store::{SessionConfig, TokenStore};
use thiserror::Error;

/// Display name used when a token exists but carries no name claim.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Fallback id claim for tokens that use the registered `sub` claim.
const SUBJECT_CLAIM: &str = "sub";

/// base64url with or without padding, as issued by JWT libraries.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a stored token could not be read.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token must have three dot-separated parts, found {0}")]
    Structure(usize),

    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// The logged-in user as far as the UI is concerned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    /// `None` when anonymous or when the token could not be decoded.
    pub display_name: Option<String>,
    /// Stable user id from the token, when present.
    pub user_id: Option<String>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build an identity from decoded claims.
    pub fn from_claims(claims: &Map<String, Value>, config: &SessionConfig) -> Self {
        let display_name = non_empty_str(claims.get(&config.name_claim))
            .unwrap_or(DEFAULT_DISPLAY_NAME)
            .to_string();
        let user_id = claim_as_id(claims.get(&config.id_claim))
            .or_else(|| claim_as_id(claims.get(SUBJECT_CLAIM)));
        Self {
            display_name: Some(display_name),
            user_id,
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn claim_as_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decode the payload segment of a compact JWT into its claims.
pub fn decode_claims(token: &str) -> Result<Map<String, Value>, TokenError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = parts.as_slice() else {
        return Err(TokenError::Structure(parts.len()));
    };
    let bytes = PAYLOAD_ENGINE.decode(payload)?;
    match serde_json::from_slice(&bytes)? {
        Value::Object(claims) => Ok(claims),
        _ => Err(TokenError::NotAnObject),
    }
}

/// Resolve the current identity from whatever token the store holds.
pub fn resolve_identity(tokens: &impl TokenStore, config: &SessionConfig) -> Identity {
    let Some(token) = tokens.read() else {
        return Identity::anonymous();
    };
    match decode_claims(&token) {
        Ok(claims) => Identity::from_claims(&claims, config),
        Err(e) => {
            tracing::warn!("Failed to decode token: {e}");
            Identity::anonymous()
        }
    }
}

/// Display name of the logged-in user, or `None` when anonymous.
pub fn resolve_display_name(tokens: &impl TokenStore, config: &SessionConfig) -> Option<String> {
    resolve_identity(tokens, config).display_name
}

/// Build an unsigned token (`alg: none`) carrying `claims`.
///
/// Used by [`crate::MemoryForum`] to hand out sessions the resolver can read.
pub fn unsigned_token(claims: &Value) -> String {
    let header = PAYLOAD_ENGINE.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = PAYLOAD_ENGINE.encode(claims.to_string());
    format!("{header}.{payload}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::config::{ID_CLAIM, NAME_CLAIM};
    use store::MemoryTokenStore;

    fn config() -> SessionConfig {
        SessionConfig::default()
    }

    #[test]
    fn test_no_token_is_anonymous() {
        let tokens = MemoryTokenStore::new();
        assert_eq!(resolve_display_name(&tokens, &config()), None);
        assert_eq!(resolve_identity(&tokens, &config()), Identity::anonymous());
    }

    #[test]
    fn test_malformed_tokens_resolve_to_none() {
        let not_json = format!("x.{}.y", PAYLOAD_ENGINE.encode("not json"));
        let array = format!("x.{}.y", PAYLOAD_ENGINE.encode("[1,2]"));
        for token in ["", "garbage", "a.b", "a.b.c.d", "a.!!!.c", &not_json, &array] {
            let tokens = MemoryTokenStore::with_token(token);
            assert_eq!(resolve_display_name(&tokens, &config()), None, "token {token:?}");
        }
    }

    #[test]
    fn test_decode_error_kinds() {
        assert!(matches!(decode_claims("only-one"), Err(TokenError::Structure(1))));
        assert!(matches!(decode_claims("a.%%%.c"), Err(TokenError::Encoding(_))));
        let number = format!("a.{}.c", PAYLOAD_ENGINE.encode("42"));
        assert!(matches!(decode_claims(&number), Err(TokenError::NotAnObject)));
    }

    #[test]
    fn test_name_claim_is_returned() {
        let token = unsigned_token(&json!({ NAME_CLAIM: "alice", ID_CLAIM: "u-7" }));
        let tokens = MemoryTokenStore::with_token(token);

        let identity = resolve_identity(&tokens, &config());
        assert_eq!(identity.display_name.as_deref(), Some("alice"));
        assert_eq!(identity.user_id.as_deref(), Some("u-7"));
    }

    #[test]
    fn test_missing_name_claim_defaults_to_user() {
        let token = unsigned_token(&json!({ "sub": "42" }));
        let tokens = MemoryTokenStore::with_token(token);

        let identity = resolve_identity(&tokens, &config());
        assert_eq!(identity.display_name.as_deref(), Some(DEFAULT_DISPLAY_NAME));
        assert_eq!(identity.user_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_empty_name_claim_defaults_to_user() {
        let token = unsigned_token(&json!({ NAME_CLAIM: "" }));
        let tokens = MemoryTokenStore::with_token(token);
        assert_eq!(
            resolve_display_name(&tokens, &config()).as_deref(),
            Some(DEFAULT_DISPLAY_NAME)
        );
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        // "{"a":1}" encodes to 10 chars + "==" padding
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"a":1}"#);
        assert!(payload.ends_with('='));
        let claims = decode_claims(&format!("h.{payload}.s")).unwrap();
        assert_eq!(claims.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_numeric_id_claim() {
        let token = unsigned_token(&json!({ NAME_CLAIM: "bob", ID_CLAIM: 7 }));
        let tokens = MemoryTokenStore::with_token(token);
        assert_eq!(resolve_identity(&tokens, &config()).user_id.as_deref(), Some("7"));
    }

    #[test]
    fn test_custom_claim_names() {
        let config = SessionConfig {
            name_claim: "unique_name".to_string(),
            ..SessionConfig::default()
        };
        let token = unsigned_token(&json!({ "unique_name": "carol" }));
        let tokens = MemoryTokenStore::with_token(token);
        assert_eq!(resolve_display_name(&tokens, &config).as_deref(), Some("carol"));
    }
}
