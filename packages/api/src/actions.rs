//! # Page operations
//!
//! Each function here is what a view does in response to mount or a button
//! press: validate the form (creates only), call the backend, enrich the
//! result with owner names, and describe the outcome as a [`Change`] for the
//! view to merge into its local list. Nothing is applied before the backend
//! confirms, so a failed operation leaves the list untouched.
//!
//! Loads are strictly sequenced: the list fetch completes before the owner
//! lookups fan out.

use crate::auth::{Credentials, Registration};
use crate::backend::ForumBackend;
use crate::models::{
    Comment, CommentId, CommentPatch, Enriched, NewComment, NewPost, NewTopic, Post, PostId,
    PostPatch, Topic, TopicId, TopicPatch,
};
use crate::usernames::UsernameCache;
use crate::ApiError;

/// Title shown when a topic id does not resolve.
pub const UNKNOWN_TOPIC: &str = "Unknown Topic";

/// A confirmed change to a view's record list.
#[derive(Clone, Debug, PartialEq)]
pub enum Change<R> {
    /// Replace the whole list.
    Loaded(Vec<Enriched<R>>),
    /// Append a new record.
    Created(Enriched<R>),
    /// Replace the record with the same id, keeping its position.
    Updated(Enriched<R>),
    /// Drop the record with this id.
    Deleted(i64),
}

pub async fn load_topics<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
) -> Result<Change<Topic>, ApiError> {
    let topics = backend.list_topics().await?;
    Ok(Change::Loaded(names.enrich_all(backend, topics).await?))
}

pub async fn create_topic<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
    input: NewTopic,
) -> Result<Change<Topic>, ApiError> {
    input.validate()?;
    let created = backend.create_topic(&input).await?;
    Ok(Change::Created(names.enrich(backend, created).await?))
}

pub async fn update_topic<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
    topic: TopicId,
    patch: TopicPatch,
) -> Result<Change<Topic>, ApiError> {
    let updated = backend.update_topic(topic, &patch).await?;
    Ok(Change::Updated(names.enrich(backend, updated).await?))
}

pub async fn delete_topic<B: ForumBackend>(
    backend: &B,
    topic: TopicId,
) -> Result<Change<Topic>, ApiError> {
    backend.delete_topic(topic).await?;
    Ok(Change::Deleted(topic))
}

/// Title of `topic`, or [`UNKNOWN_TOPIC`] if the topic list lacks it.
pub async fn topic_title<B: ForumBackend>(backend: &B, topic: TopicId) -> Result<String, ApiError> {
    let topics = backend.list_topics().await?;
    Ok(topics
        .into_iter()
        .find(|t| t.id == topic)
        .map(|t| t.title)
        .unwrap_or_else(|| UNKNOWN_TOPIC.to_string()))
}

pub async fn load_posts<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
    topic: TopicId,
) -> Result<Change<Post>, ApiError> {
    let posts = backend.list_posts(topic).await?;
    Ok(Change::Loaded(names.enrich_all(backend, posts).await?))
}

pub async fn create_post<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
    topic: TopicId,
    input: NewPost,
) -> Result<Change<Post>, ApiError> {
    input.validate()?;
    let created = backend.create_post(topic, &input).await?;
    Ok(Change::Created(names.enrich(backend, created).await?))
}

pub async fn update_post<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
    topic: TopicId,
    post: PostId,
    patch: PostPatch,
) -> Result<Change<Post>, ApiError> {
    let updated = backend.update_post(topic, post, &patch).await?;
    Ok(Change::Updated(names.enrich(backend, updated).await?))
}

pub async fn delete_post<B: ForumBackend>(
    backend: &B,
    topic: TopicId,
    post: PostId,
) -> Result<Change<Post>, ApiError> {
    backend.delete_post(topic, post).await?;
    Ok(Change::Deleted(post))
}

/// Find `post` in its topic's post list. `None` if it is gone.
pub async fn find_post<B: ForumBackend>(
    backend: &B,
    topic: TopicId,
    post: PostId,
) -> Result<Option<Post>, ApiError> {
    let posts = backend.list_posts(topic).await?;
    Ok(posts.into_iter().find(|p| p.id == post))
}

pub async fn load_comments<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
    topic: TopicId,
    post: PostId,
) -> Result<Change<Comment>, ApiError> {
    let comments = backend.list_comments(topic, post).await?;
    Ok(Change::Loaded(names.enrich_all(backend, comments).await?))
}

pub async fn create_comment<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
    topic: TopicId,
    post: PostId,
    input: NewComment,
) -> Result<Change<Comment>, ApiError> {
    input.validate()?;
    let created = backend.create_comment(topic, post, &input).await?;
    Ok(Change::Created(names.enrich(backend, created).await?))
}

pub async fn update_comment<B: ForumBackend>(
    backend: &B,
    names: &UsernameCache,
    topic: TopicId,
    post: PostId,
    comment: CommentId,
    patch: CommentPatch,
) -> Result<Change<Comment>, ApiError> {
    let updated = backend.update_comment(topic, post, comment, &patch).await?;
    Ok(Change::Updated(names.enrich(backend, updated).await?))
}

pub async fn delete_comment<B: ForumBackend>(
    backend: &B,
    topic: TopicId,
    post: PostId,
    comment: CommentId,
) -> Result<Change<Comment>, ApiError> {
    backend.delete_comment(topic, post, comment).await?;
    Ok(Change::Deleted(comment))
}

/// Check the form, then exchange credentials for a session token.
pub async fn log_in<B: ForumBackend>(backend: &B, credentials: &Credentials) -> Result<String, ApiError> {
    credentials.validate()?;
    backend.login(credentials).await
}

/// Check the form, then create the account. The user still has to log in.
pub async fn register<B: ForumBackend>(
    backend: &B,
    registration: &Registration,
    confirm_password: &str,
) -> Result<(), ApiError> {
    registration.validate(confirm_password)?;
    backend.register(registration).await
}
