use serde::{Deserialize, Serialize};

use super::{require, CommentId, PostId, Record, UserId};
use crate::ApiError;

/// A reply to a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    #[serde(alias = "userID")]
    pub user_id: UserId,
    #[serde(default, alias = "postID", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<PostId>,
}

impl Record for Comment {
    fn id(&self) -> i64 {
        self.id
    }

    fn owner(&self) -> &UserId {
        &self.user_id
    }

    fn keep_missing(&mut self, previous: &Self) {
        if self.post_id.is_none() {
            self.post_id = previous.post_id;
        }
    }
}

/// Form input for `POST .../posts/{postId}/comments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[self.content.as_str()], "Comment cannot be empty")
    }
}

/// Edit payload for `PUT .../comments/{commentId}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CommentPatch {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_comment_rejected() {
        let input = NewComment {
            content: "  \t".to_string(),
        };
        assert_eq!(input.validate().unwrap_err().to_string(), "Comment cannot be empty");
    }
}
