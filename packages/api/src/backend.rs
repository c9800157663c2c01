//! # Service client trait
//!
//! [`ForumBackend`] maps CRUD intents for each resource family onto the
//! remote API. Implementations:
//!
//! | Type | Talks to |
//! |------|----------|
//! | [`crate::HttpForum`] | the REST API over `reqwest` |
//! | [`crate::MemoryForum`] | an in-process table set (tests, offline preview) |
//!
//! Every call is a single-shot async request: no retry, no backoff, no
//! timeout beyond the transport's. Callers validate required fields before
//! calling a `create_*` method; the backend assumes non-empty input.

use std::future::Future;

use crate::auth::{Credentials, Registration};
use crate::models::{
    Comment, CommentId, CommentPatch, NewComment, NewPost, NewTopic, Post, PostId, PostPatch,
    Topic, TopicId, TopicPatch, UserId,
};
use crate::ApiError;

/// Async interface to the forum's resources.
pub trait ForumBackend {
    fn list_topics(&self) -> impl Future<Output = Result<Vec<Topic>, ApiError>>;
    fn create_topic(
        &self,
        input: &NewTopic,
    ) -> impl Future<Output = Result<Topic, ApiError>>;
    fn update_topic(
        &self,
        topic: TopicId,
        patch: &TopicPatch,
    ) -> impl Future<Output = Result<Topic, ApiError>>;
    fn delete_topic(&self, topic: TopicId) -> impl Future<Output = Result<(), ApiError>>;

    fn list_posts(&self, topic: TopicId) -> impl Future<Output = Result<Vec<Post>, ApiError>>;
    fn create_post(
        &self,
        topic: TopicId,
        input: &NewPost,
    ) -> impl Future<Output = Result<Post, ApiError>>;
    fn update_post(
        &self,
        topic: TopicId,
        post: PostId,
        patch: &PostPatch,
    ) -> impl Future<Output = Result<Post, ApiError>>;
    fn delete_post(
        &self,
        topic: TopicId,
        post: PostId,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn list_comments(
        &self,
        topic: TopicId,
        post: PostId,
    ) -> impl Future<Output = Result<Vec<Comment>, ApiError>>;
    fn create_comment(
        &self,
        topic: TopicId,
        post: PostId,
        input: &NewComment,
    ) -> impl Future<Output = Result<Comment, ApiError>>;
    fn update_comment(
        &self,
        topic: TopicId,
        post: PostId,
        comment: CommentId,
        patch: &CommentPatch,
    ) -> impl Future<Output = Result<Comment, ApiError>>;
    fn delete_comment(
        &self,
        topic: TopicId,
        post: PostId,
        comment: CommentId,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Resolve an owner id to a display name.
    fn lookup_username(&self, user: &UserId) -> impl Future<Output = Result<String, ApiError>>;

    /// Exchange credentials for a session token.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<String, ApiError>>;

    /// Create an account. Does not log in.
    fn register(&self, registration: &Registration)
        -> impl Future<Output = Result<(), ApiError>>;
}
