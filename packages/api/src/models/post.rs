use serde::{Deserialize, Serialize};

use super::{require, PostId, Record, TopicId, UserId};
use crate::ApiError;

/// A message inside a topic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(alias = "userID")]
    pub user_id: UserId,
    #[serde(default, alias = "topicID", skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<TopicId>,
}

impl Record for Post {
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
        if self.topic_id.is_none() {
            self.topic_id = previous.topic_id;
        }
    }
}

/// Form input for `POST /api/topics/{topicId}/posts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[self.title.as_str(), self.body.as_str()], "Title and Body are required")
    }
}

/// Edit payload for `PUT /api/topics/{topicId}/posts/{postId}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PostPatch {
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_body_required() {
        let cases = [("", "body"), ("title", ""), ("", ""), ("title", " \n")];
        for (title, body) in cases {
            let input = NewPost {
                title: title.to_string(),
                body: body.to_string(),
            };
            let err = input.validate().unwrap_err();
            assert_eq!(err.to_string(), "Title and Body are required");
        }

        let ok = NewPost {
            title: "t".to_string(),
            body: "b".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_decode_with_topic_reference() {
        let post: Post =
            serde_json::from_str(r#"{"id":3,"title":"T","body":"B","userId":"u1","topicId":9}"#)
                .unwrap();
        assert_eq!(post.topic_id, Some(9));
        assert_eq!(post.user_id, UserId::from("u1"));
    }

    #[test]
    fn test_update_response_without_title() {
        let mut updated: Post = serde_json::from_str(r#"{"id":1,"body":"new","userId":7}"#).unwrap();
        assert_eq!(updated.title, "");
        assert_eq!(updated.topic_id, None);

        let previous = Post {
            id: 1,
            title: "Original".to_string(),
            body: "old".to_string(),
            user_id: UserId::from("7"),
            topic_id: Some(4),
        };
        updated.keep_missing(&previous);
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.body, "new");
        assert_eq!(updated.topic_id, Some(4));
    }
}
