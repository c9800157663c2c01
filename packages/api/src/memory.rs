//! # In-memory forum backend
//!
//! [`MemoryForum`] implements [`ForumBackend`] over plain vectors so that page
//! logic can be exercised without a server. It records every request it
//! serves, which lets tests assert that validation happens before any
//! network call and that mutations do not trigger a refetch.
//!
//! Behaviour mirrors the REST API where it matters to the client:
//!
//! - ids are allocated from a single counter;
//! - creates are owned by the user who last logged in (or was set with
//!   [`MemoryForum::act_as`]); anonymous creates answer 401;
//! - unknown ids answer 404;
//! - [`MemoryForum::set_offline`] makes every request except username
//!   lookups answer 503, and [`MemoryForum::fail_lookups_for`] makes lookups
//!   of one user answer 500.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::json;
use store::config::{ID_CLAIM, NAME_CLAIM};

use crate::auth::{Credentials, Registration};
use crate::backend::ForumBackend;
use crate::identity::unsigned_token;
use crate::models::{
    Comment, CommentId, CommentPatch, NewComment, NewPost, NewTopic, Post, PostId, PostPatch,
    Topic, TopicId, TopicPatch, UserId,
};
use crate::ApiError;

#[derive(Clone, Debug)]
struct MemoryUser {
    id: UserId,
    name: String,
    password: String,
}

#[derive(Debug, Default)]
struct Tables {
    topics: Vec<Topic>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    users: Vec<MemoryUser>,
    next_id: i64,
    acting: Option<UserId>,
    offline: bool,
    failing_lookups: HashSet<UserId>,
    requests: Vec<String>,
    lookups: usize,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn bump_past(&mut self, id: i64) {
        self.next_id = self.next_id.max(id);
    }

    /// Log the request and fail it when offline.
    fn serve(&mut self, request: String) -> Result<(), ApiError> {
        self.requests.push(request.clone());
        if self.offline {
            return Err(status(503, &request));
        }
        Ok(())
    }

    fn owner(&self, request: &str) -> Result<UserId, ApiError> {
        self.acting.clone().ok_or_else(|| status(401, request))
    }
}

fn status(status: u16, request: &str) -> ApiError {
    ApiError::Status {
        status,
        url: request.to_string(),
    }
}

/// In-process ForumBackend for tests and offline previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryForum {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryForum {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a user that can own records and be looked up.
    pub fn add_user(&self, id: impl Into<UserId>, name: &str) {
        self.add_user_with_password(id, name, "");
    }

    pub fn add_user_with_password(&self, id: impl Into<UserId>, name: &str, password: &str) {
        self.tables().users.push(MemoryUser {
            id: id.into(),
            name: name.to_string(),
            password: password.to_string(),
        });
    }

    /// Owner of subsequent creates.
    pub fn act_as(&self, user: impl Into<UserId>) {
        self.tables().acting = Some(user.into());
    }

    pub fn add_topic(&self, topic: Topic) {
        let mut tables = self.tables();
        tables.bump_past(topic.id);
        tables.topics.push(topic);
    }

    /// Seed a post; `post.topic_id` decides which topic lists it.
    pub fn add_post(&self, post: Post) {
        let mut tables = self.tables();
        tables.bump_past(post.id);
        tables.posts.push(post);
    }

    /// Seed a comment; `comment.post_id` decides which post lists it.
    pub fn add_comment(&self, comment: Comment) {
        let mut tables = self.tables();
        tables.bump_past(comment.id);
        tables.comments.push(comment);
    }

    pub fn set_offline(&self, offline: bool) {
        self.tables().offline = offline;
    }

    pub fn fail_lookups_for(&self, user: impl Into<UserId>) {
        self.tables().failing_lookups.insert(user.into());
    }

    /// Every non-lookup request served so far, as `"METHOD path"`.
    pub fn requests(&self) -> Vec<String> {
        self.tables().requests.clone()
    }

    /// Number of username lookups served so far.
    pub fn lookups(&self) -> usize {
        self.tables().lookups
    }
}

impl ForumBackend for MemoryForum {
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        let mut tables = self.tables();
        tables.serve("GET /api/topics".to_string())?;
        Ok(tables.topics.clone())
    }

    async fn create_topic(&self, input: &NewTopic) -> Result<Topic, ApiError> {
        let mut tables = self.tables();
        let request = "POST /api/topics".to_string();
        tables.serve(request.clone())?;
        let topic = Topic {
            id: tables.allocate_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            user_id: tables.owner(&request)?,
        };
        tables.topics.push(topic.clone());
        Ok(topic)
    }

    async fn update_topic(&self, topic: TopicId, patch: &TopicPatch) -> Result<Topic, ApiError> {
        let mut tables = self.tables();
        let request = format!("PUT /api/topics/{topic}");
        tables.serve(request.clone())?;
        let found = tables
            .topics
            .iter_mut()
            .find(|t| t.id == topic)
            .ok_or_else(|| status(404, &request))?;
        found.description = patch.description.clone();
        Ok(found.clone())
    }

    async fn delete_topic(&self, topic: TopicId) -> Result<(), ApiError> {
        let mut tables = self.tables();
        let request = format!("DELETE /api/topics/{topic}");
        tables.serve(request.clone())?;
        let before = tables.topics.len();
        tables.topics.retain(|t| t.id != topic);
        if tables.topics.len() == before {
            return Err(status(404, &request));
        }
        Ok(())
    }

    async fn list_posts(&self, topic: TopicId) -> Result<Vec<Post>, ApiError> {
        let mut tables = self.tables();
        tables.serve(format!("GET /api/topics/{topic}/posts"))?;
        Ok(tables
            .posts
            .iter()
            .filter(|p| p.topic_id == Some(topic))
            .cloned()
            .collect())
    }

    async fn create_post(&self, topic: TopicId, input: &NewPost) -> Result<Post, ApiError> {
        let mut tables = self.tables();
        let request = format!("POST /api/topics/{topic}/posts");
        tables.serve(request.clone())?;
        if !tables.topics.iter().any(|t| t.id == topic) {
            return Err(status(404, &request));
        }
        let post = Post {
            id: tables.allocate_id(),
            title: input.title.clone(),
            body: input.body.clone(),
            user_id: tables.owner(&request)?,
            topic_id: Some(topic),
        };
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(
        &self,
        topic: TopicId,
        post: PostId,
        patch: &PostPatch,
    ) -> Result<Post, ApiError> {
        let mut tables = self.tables();
        let request = format!("PUT /api/topics/{topic}/posts/{post}");
        tables.serve(request.clone())?;
        let found = tables
            .posts
            .iter_mut()
            .find(|p| p.id == post && p.topic_id == Some(topic))
            .ok_or_else(|| status(404, &request))?;
        found.body = patch.body.clone();
        Ok(found.clone())
    }

    async fn delete_post(&self, topic: TopicId, post: PostId) -> Result<(), ApiError> {
        let mut tables = self.tables();
        let request = format!("DELETE /api/topics/{topic}/posts/{post}");
        tables.serve(request.clone())?;
        let before = tables.posts.len();
        tables
            .posts
            .retain(|p| !(p.id == post && p.topic_id == Some(topic)));
        if tables.posts.len() == before {
            return Err(status(404, &request));
        }
        Ok(())
    }

    async fn list_comments(&self, topic: TopicId, post: PostId) -> Result<Vec<Comment>, ApiError> {
        let mut tables = self.tables();
        tables.serve(format!("GET /api/topics/{topic}/posts/{post}/comments"))?;
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.post_id == Some(post))
            .cloned()
            .collect())
    }

    async fn create_comment(
        &self,
        topic: TopicId,
        post: PostId,
        input: &NewComment,
    ) -> Result<Comment, ApiError> {
        let mut tables = self.tables();
        let request = format!("POST /api/topics/{topic}/posts/{post}/comments");
        tables.serve(request.clone())?;
        if !tables.posts.iter().any(|p| p.id == post) {
            return Err(status(404, &request));
        }
        let comment = Comment {
            id: tables.allocate_id(),
            content: input.content.clone(),
            user_id: tables.owner(&request)?,
            post_id: Some(post),
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn update_comment(
        &self,
        topic: TopicId,
        post: PostId,
        comment: CommentId,
        patch: &CommentPatch,
    ) -> Result<Comment, ApiError> {
        let mut tables = self.tables();
        let request = format!("PUT /api/topics/{topic}/posts/{post}/comments/{comment}");
        tables.serve(request.clone())?;
        let found = tables
            .comments
            .iter_mut()
            .find(|c| c.id == comment && c.post_id == Some(post))
            .ok_or_else(|| status(404, &request))?;
        found.content = patch.content.clone();
        Ok(found.clone())
    }

    async fn delete_comment(
        &self,
        topic: TopicId,
        post: PostId,
        comment: CommentId,
    ) -> Result<(), ApiError> {
        let mut tables = self.tables();
        let request = format!("DELETE /api/topics/{topic}/posts/{post}/comments/{comment}");
        tables.serve(request.clone())?;
        let before = tables.comments.len();
        tables
            .comments
            .retain(|c| !(c.id == comment && c.post_id == Some(post)));
        if tables.comments.len() == before {
            return Err(status(404, &request));
        }
        Ok(())
    }

    async fn lookup_username(&self, user: &UserId) -> Result<String, ApiError> {
        let mut tables = self.tables();
        tables.lookups += 1;
        let request = format!("GET /api/users/{user}");
        if tables.failing_lookups.contains(user) {
            return Err(status(500, &request));
        }
        tables
            .users
            .iter()
            .find(|u| &u.id == user)
            .map(|u| u.name.clone())
            .ok_or_else(|| status(404, &request))
    }

    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let mut tables = self.tables();
        let request = "POST /api/auth/login".to_string();
        tables.serve(request.clone())?;
        let user = tables
            .users
            .iter()
            .find(|u| u.name == credentials.username && u.password == credentials.password)
            .cloned()
            .ok_or_else(|| status(401, &request))?;
        tables.acting = Some(user.id.clone());
        Ok(unsigned_token(&json!({
            NAME_CLAIM: user.name,
            ID_CLAIM: user.id.as_str(),
        })))
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let mut tables = self.tables();
        let request = "POST /api/auth/register".to_string();
        tables.serve(request.clone())?;
        if tables.users.iter().any(|u| u.name == registration.username) {
            return Err(status(409, &request));
        }
        let id = UserId::from(tables.allocate_id());
        tables.users.push(MemoryUser {
            id,
            name: registration.username.clone(),
            password: registration.password.clone(),
        });
        Ok(())
    }
}
