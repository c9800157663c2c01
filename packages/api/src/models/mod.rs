//! # Forum records as exchanged with the backend
//!
//! The backend owns these entities; the client treats them as DTOs and only
//! checks that required form fields are filled in before creating one.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Topic`] / [`NewTopic`] / [`TopicPatch`] | Top-level discussion thread. |
//! | [`Post`] / [`NewPost`] / [`PostPatch`] | Message inside a topic. |
//! | [`Comment`] / [`NewComment`] / [`CommentPatch`] | Reply to a post. |
//! | [`UserId`] | Opaque owner id, accepted as JSON string or integer. |
//! | [`Enriched`] | A record plus its owner's display name. |
//! | [`ListResponse`] | Typed list contract: plain array or `$values` envelope. |
//!
//! Titles are fixed once created; edits only touch the body-like field.
//! Update responses may therefore leave the title out, and
//! [`Record::keep_missing`] fills it back in from the list's copy.

mod comment;
mod listing;
mod post;
mod topic;
mod user;

pub use comment::{Comment, CommentPatch, NewComment};
pub use listing::ListResponse;
pub use post::{NewPost, Post, PostPatch};
pub use topic::{NewTopic, Topic, TopicPatch};
pub use user::{UserId, UsernameResponse};

pub type TopicId = i64;
pub type PostId = i64;
pub type CommentId = i64;

/// Common shape of every forum record.
pub trait Record: Clone + PartialEq {
    fn id(&self) -> i64;
    fn owner(&self) -> &UserId;

    /// Fill fields the server left out of an update response from
    /// `previous`, the copy already on screen.
    fn keep_missing(&mut self, _previous: &Self) {}
}

/// A record together with its owner's resolved display name.
#[derive(Clone, Debug, PartialEq)]
pub struct Enriched<R> {
    pub record: R,
    pub owner_name: String,
}

impl<R: Record> Enriched<R> {
    pub fn new(record: R, owner_name: impl Into<String>) -> Self {
        Self {
            record,
            owner_name: owner_name.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.record.id()
    }

    /// Owner name for display, `"Unknown"` when the lookup returned nothing.
    pub fn owner_label(&self) -> &str {
        if self.owner_name.is_empty() {
            "Unknown"
        } else {
            &self.owner_name
        }
    }
}

/// Reject blank required fields before anything is sent.
pub(crate) fn require(fields: &[&str], message: &str) -> Result<(), crate::ApiError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        Err(crate::ApiError::validation(message))
    } else {
        Ok(())
    }
}
