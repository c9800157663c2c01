//! # HTTP service client
//!
//! [`HttpForum`] implements [`ForumBackend`] against the forum's REST API
//! with `reqwest` (which uses `fetch` when compiled to WASM).
//!
//! ## Endpoints
//!
//! | Family | Collection | Item |
//! |--------|-----------|------|
//! | topics | `/api/topics` | `/api/topics/{topicId}` |
//! | posts | `/api/topics/{topicId}/posts` | `.../posts/{postId}` |
//! | comments | `.../posts/{postId}/comments` | `.../comments/{commentId}` |
//! | users | | `/api/users/{userId}` |
//! | auth | `/api/auth/login`, `/api/auth/register` | |
//!
//! `GET` on a collection lists, `POST` creates, `PUT` on an item updates and
//! `DELETE` removes. Every request carries `Authorization: Bearer <token>`
//! when the token store holds one.
//!
//! ## Response contracts
//!
//! Bodies are read as text and decoded with `serde_json` into the endpoint's
//! typed contract ([`ListResponse`], [`UsernameResponse`], [`LoginResponse`]
//! or the record itself), so a shape mismatch surfaces as
//! [`ApiError::Decode`] instead of a transport error.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{ClientConfig, TokenStore};

use crate::auth::{Credentials, LoginResponse, Registration};
use crate::backend::ForumBackend;
use crate::models::{
    Comment, CommentId, CommentPatch, ListResponse, NewComment, NewPost, NewTopic, Post, PostId,
    PostPatch, Topic, TopicId, TopicPatch, UserId, UsernameResponse,
};
use crate::session::Session;
use crate::ApiError;

/// REST client for the forum backend.
#[derive(Clone)]
pub struct HttpForum<T: TokenStore> {
    client: Client,
    config: ClientConfig,
    tokens: T,
}

impl<T: TokenStore> HttpForum<T> {
    pub fn new(config: ClientConfig, tokens: T) -> Self {
        Self {
            client: Client::new(),
            config,
            tokens,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("{method} {url}");
        let request = self.client.request(method, url);
        match self.tokens.read() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    async fn fetch<D: DeserializeOwned>(request: RequestBuilder) -> Result<D, ApiError> {
        let body = Self::send(request).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_list<D: DeserializeOwned>(&self, path: &str) -> Result<Vec<D>, ApiError> {
        let list: ListResponse<D> = Self::fetch(self.request(Method::GET, path)).await?;
        Ok(list.into_vec())
    }

    async fn post_json<B: Serialize, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        Self::fetch(self.request(Method::POST, path).json(body)).await
    }

    async fn put_json<B: Serialize, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        Self::fetch(self.request(Method::PUT, path).json(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        Self::send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

impl<T: TokenStore + Clone> HttpForum<T> {
    /// Client sharing the session's configuration and token store.
    pub fn for_session(session: &Session<T>) -> Self {
        Self::new(session.config().clone(), session.tokens().clone())
    }
}

fn topics_path() -> String {
    "/api/topics".to_string()
}

fn topic_path(topic: TopicId) -> String {
    format!("/api/topics/{topic}")
}

fn posts_path(topic: TopicId) -> String {
    format!("/api/topics/{topic}/posts")
}

fn post_path(topic: TopicId, post: PostId) -> String {
    format!("/api/topics/{topic}/posts/{post}")
}

fn comments_path(topic: TopicId, post: PostId) -> String {
    format!("/api/topics/{topic}/posts/{post}/comments")
}

fn comment_path(topic: TopicId, post: PostId, comment: CommentId) -> String {
    format!("/api/topics/{topic}/posts/{post}/comments/{comment}")
}

impl<T: TokenStore> ForumBackend for HttpForum<T> {
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        self.get_list(&topics_path()).await
    }

    async fn create_topic(&self, input: &NewTopic) -> Result<Topic, ApiError> {
        self.post_json(&topics_path(), input).await
    }

    async fn update_topic(&self, topic: TopicId, patch: &TopicPatch) -> Result<Topic, ApiError> {
        self.put_json(&topic_path(topic), patch).await
    }

    async fn delete_topic(&self, topic: TopicId) -> Result<(), ApiError> {
        self.delete(&topic_path(topic)).await
    }

    async fn list_posts(&self, topic: TopicId) -> Result<Vec<Post>, ApiError> {
        self.get_list(&posts_path(topic)).await
    }

    async fn create_post(&self, topic: TopicId, input: &NewPost) -> Result<Post, ApiError> {
        self.post_json(&posts_path(topic), input).await
    }

    async fn update_post(
        &self,
        topic: TopicId,
        post: PostId,
        patch: &PostPatch,
    ) -> Result<Post, ApiError> {
        self.put_json(&post_path(topic, post), patch).await
    }

    async fn delete_post(&self, topic: TopicId, post: PostId) -> Result<(), ApiError> {
        self.delete(&post_path(topic, post)).await
    }

    async fn list_comments(&self, topic: TopicId, post: PostId) -> Result<Vec<Comment>, ApiError> {
        self.get_list(&comments_path(topic, post)).await
    }

    async fn create_comment(
        &self,
        topic: TopicId,
        post: PostId,
        input: &NewComment,
    ) -> Result<Comment, ApiError> {
        self.post_json(&comments_path(topic, post), input).await
    }

    async fn update_comment(
        &self,
        topic: TopicId,
        post: PostId,
        comment: CommentId,
        patch: &CommentPatch,
    ) -> Result<Comment, ApiError> {
        self.put_json(&comment_path(topic, post, comment), patch).await
    }

    async fn delete_comment(
        &self,
        topic: TopicId,
        post: PostId,
        comment: CommentId,
    ) -> Result<(), ApiError> {
        self.delete(&comment_path(topic, post, comment)).await
    }

    async fn lookup_username(&self, user: &UserId) -> Result<String, ApiError> {
        let path = format!("/api/users/{user}");
        let response: UsernameResponse = Self::fetch(self.request(Method::GET, &path)).await?;
        Ok(response.into_name())
    }

    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response: LoginResponse = self.post_json("/api/auth/login", credentials).await?;
        Ok(response.token)
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        Self::send(self.request(Method::POST, "/api/auth/register").json(registration)).await?;
        Ok(())
    }
}
