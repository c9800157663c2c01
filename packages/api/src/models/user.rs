//! Owner ids and the username lookup response.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque user identifier as recorded on every forum record.
///
/// The backend sends ids either as strings (GUIDs) or as integers; both are
/// normalised to their string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Number(i64),
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawUserId::deserialize(deserializer)? {
            RawUserId::Text(id) => Self(id),
            RawUserId::Number(id) => Self::from(id),
        })
    }
}

/// Body of `GET /api/users/{id}`: a bare JSON string or a user object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UsernameResponse {
    Bare(String),
    Object {
        #[serde(rename = "userName", alias = "username", alias = "UserName")]
        user_name: String,
    },
}

impl UsernameResponse {
    pub fn into_name(self) -> String {
        match self {
            Self::Bare(name) | Self::Object { user_name: name } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_string_or_number() {
        let text: UserId = serde_json::from_str(r#""a1b2-c3""#).unwrap();
        let number: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(text.as_str(), "a1b2-c3");
        assert_eq!(number, UserId::from("7"));
        assert!(serde_json::from_str::<UserId>("true").is_err());
    }

    #[test]
    fn test_username_response_shapes() {
        let bare: UsernameResponse = serde_json::from_str(r#""alice""#).unwrap();
        let object: UsernameResponse =
            serde_json::from_str(r#"{"id":"7","userName":"bob","email":"b@x"}"#).unwrap();
        let lower: UsernameResponse = serde_json::from_str(r#"{"username":"carol"}"#).unwrap();

        assert_eq!(bare.into_name(), "alice");
        assert_eq!(object.into_name(), "bob");
        assert_eq!(lower.into_name(), "carol");
        assert!(serde_json::from_str::<UsernameResponse>(r#"{"id":7}"#).is_err());
    }
}
