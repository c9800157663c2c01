//! # API crate: forum service clients and session identity
//!
//! Everything the forum views need to talk to the backend and to decide who
//! is looking at the page lives here. The crate is UI-agnostic: it knows
//! nothing about Dioxus, so every rule can be tested with plain `#[test]` and
//! `#[tokio::test]` functions.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`identity`] | Decode the session token's payload into an [`Identity`] (display name + user id). No signature check. |
//! | [`gate`] | Decide whether edit/delete controls are shown for a record. |
//! | [`session`] | [`Session`]: the injected context bundling the token store, configuration and username cache. |
//! | [`models`] | Topic/Post/Comment DTOs, create inputs, edit patches, and the typed list envelope. |
//! | [`backend`] | The [`ForumBackend`] trait every service client implements. |
//! | [`http`] | [`HttpForum`], the `reqwest` implementation against the REST API. |
//! | [`memory`] | [`MemoryForum`], an in-process backend for tests and offline previews. |
//! | [`usernames`] | Memoised owner-name lookups and the enrichment fan-out. |
//! | [`actions`] | Page-level operations: validate, call the backend, enrich, report a [`Change`]. |
//! | [`auth`] | Login/registration payloads. |
//!
//! ## Error handling
//!
//! Service calls return [`ApiError`]. Token problems are [`TokenError`], which
//! the identity resolver swallows into an anonymous identity.

pub mod actions;
pub mod auth;
pub mod backend;
mod error;
pub mod gate;
pub mod http;
pub mod identity;
pub mod memory;
pub mod models;
pub mod session;
pub mod usernames;

pub use actions::Change;
pub use backend::ForumBackend;
pub use error::ApiError;
pub use gate::{can_modify, ADMIN_NAME};
pub use http::HttpForum;
pub use identity::{Identity, TokenError};
pub use memory::MemoryForum;
pub use models::{
    Comment, CommentPatch, Enriched, NewComment, NewPost, NewTopic, Post, PostPatch, Record,
    Topic, TopicPatch, UserId,
};
pub use session::Session;
pub use usernames::UsernameCache;
