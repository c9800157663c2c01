use serde::{Deserialize, Serialize};

use super::{require, Record, TopicId, UserId};
use crate::ApiError;

/// A discussion thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// The topics endpoint spells this `userID`.
    #[serde(rename = "userId", alias = "userID")]
    pub user_id: UserId,
}

impl Record for Topic {
    fn id(&self) -> i64 {
        self.id
    }

    fn owner(&self) -> &UserId {
        &self.user_id
    }

    fn keep_missing(&mut self, previous: &Self) {
        if self.title.is_empty() {
            self.title = previous.title.clone();
        }
    }
}

/// Form input for `POST /api/topics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
}

impl NewTopic {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(
            &[self.title.as_str(), self.description.as_str()],
            "Title and Description are required",
        )
    }
}

/// Edit payload for `PUT /api/topics/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TopicPatch {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_both_owner_spellings() {
        let upper: Topic = serde_json::from_str(
            r#"{"$id":"2","id":1,"title":"A","description":"d","userID":"u-7"}"#,
        )
        .unwrap();
        let lower: Topic = serde_json::from_str(r#"{"id":1,"title":"A","userId":7}"#).unwrap();

        assert_eq!(upper.user_id, UserId::from("u-7"));
        assert_eq!(lower.user_id, UserId::from("7"));
        assert_eq!(lower.description, "");
    }

    #[test]
    fn test_title_and_description_required() {
        let cases = [("   ", "body"), ("Rust", ""), ("Rust", " \n"), ("", "")];
        for (title, description) in cases {
            let input = NewTopic {
                title: title.to_string(),
                description: description.to_string(),
            };
            let err = input.validate().unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "Title and Description are required");
        }

        let ok = NewTopic {
            title: "Rust".to_string(),
            description: "Ownership and borrowing".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_update_response_keeps_title() {
        let mut updated: Topic =
            serde_json::from_str(r#"{"id":2,"description":"edited","userID":"7"}"#).unwrap();
        let previous = Topic {
            id: 2,
            title: "Rust".to_string(),
            description: "old".to_string(),
            user_id: UserId::from("7"),
        };
        updated.keep_missing(&previous);
        assert_eq!(updated.title, "Rust");
        assert_eq!(updated.description, "edited");
    }
}
