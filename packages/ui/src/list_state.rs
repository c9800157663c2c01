//! Local state behind every record list page.
//!
//! A page holds exactly one [`ListState`]: the enriched records in display
//! order, at most one record in edit mode, and a single error slot. Backend
//! outcomes come in as [`Change`]s and are merged without refetching. An
//! update response replaces its record in place, keeping any field the
//! server left out (see [`Record::keep_missing`]).

use api::{ApiError, Change, Enriched, Record};

/// Text buffer for the one record currently being edited.
#[derive(Clone, Debug, PartialEq)]
pub struct EditBuffer {
    pub id: i64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<Enriched<R>>,
    pub loading: bool,
    pub editing: Option<EditBuffer>,
    pub error: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            editing: None,
            error: None,
        }
    }
}

impl<R: Record> ListState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a confirmed change into the list.
    pub fn apply(&mut self, change: Change<R>) {
        match change {
            Change::Loaded(items) => {
                self.items = items;
                self.loading = false;
            }
            Change::Created(item) => self.items.push(item),
            Change::Updated(mut item) => {
                if self.is_editing(item.id()) {
                    self.editing = None;
                }
                if let Some(slot) = self.items.iter_mut().find(|e| e.id() == item.id()) {
                    item.record.keep_missing(&slot.record);
                    *slot = item;
                }
            }
            Change::Deleted(id) => {
                self.items.retain(|e| e.id() != id);
                if self.is_editing(id) {
                    self.editing = None;
                }
            }
        }
        self.error = None;
    }

    /// Apply `result` or record its failure. Returns whether it succeeded.
    ///
    /// `context` is the user-facing failure text without a trailing period,
    /// e.g. "Failed to create topic".
    pub fn settle(&mut self, result: Result<Change<R>, ApiError>, context: &str) -> bool {
        match result {
            Ok(change) => {
                self.apply(change);
                true
            }
            Err(e) => {
                self.fail(&e, context);
                false
            }
        }
    }

    pub fn fail(&mut self, error: &ApiError, context: &str) {
        if !error.is_validation() {
            tracing::error!("{}: {}", context, error);
        }
        self.error = Some(error.user_message(context));
        self.loading = false;
    }

    pub fn get(&self, id: i64) -> Option<&Enriched<R>> {
        self.items.iter().find(|e| e.id() == id)
    }

    /// Enter edit mode for `id`, leaving any other record's edit mode.
    pub fn begin_edit(&mut self, id: i64, text: impl Into<String>) {
        self.editing = Some(EditBuffer {
            id,
            text: text.into(),
        });
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(buffer) = self.editing.as_mut() {
            buffer.text = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing.as_ref().is_some_and(|b| b.id == id)
    }

    /// Edited text for `id`, if it is the record in edit mode.
    pub fn edit_text(&self, id: i64) -> Option<&str> {
        self.editing
            .as_ref()
            .filter(|b| b.id == id)
            .map(|b| b.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::actions;
    use api::models::ListResponse;
    use api::{Comment, CommentPatch, MemoryForum, NewComment, NewPost, NewTopic, Post, Topic};
    use api::{PostPatch, TopicPatch, UserId, UsernameCache};

    fn topic(id: i64, owner: &str) -> Topic {
        Topic {
            id,
            title: format!("Topic {id}"),
            description: format!("about {id}"),
            user_id: UserId::from(owner),
        }
    }

    fn post(id: i64, owner: &str) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            body: "body".to_string(),
            user_id: UserId::from(owner),
            topic_id: Some(1),
        }
    }

    fn forum() -> MemoryForum {
        let forum = MemoryForum::new();
        forum.add_user("7", "alice");
        forum.add_user("8", "bob");
        forum.act_as("7");
        forum
    }

    fn ids<R: Record>(state: &ListState<R>) -> Vec<i64> {
        state.items.iter().map(|e| e.id()).collect()
    }

    #[tokio::test]
    async fn test_delete_filters_without_refetch() {
        let forum = forum();
        forum.add_topic(topic(1, "7"));
        forum.add_topic(topic(2, "8"));
        let names = UsernameCache::new();
        let mut state = ListState::new();

        state.settle(actions::load_topics(&forum, &names).await, "Failed to fetch topics");
        assert_eq!(ids(&state), vec![1, 2]);
        assert!(!state.loading);

        let result = actions::delete_topic(&forum, 1).await;
        assert!(state.settle(result, "Failed to delete topic"));
        assert_eq!(ids(&state), vec![2]);
        assert_eq!(
            forum.requests(),
            vec!["GET /api/topics".to_string(), "DELETE /api/topics/1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_update_keeps_position_and_leaves_edit_mode() {
        let forum = forum();
        for id in 1..=3 {
            forum.add_topic(topic(id, "7"));
        }
        let names = UsernameCache::new();
        let mut state = ListState::new();
        state.settle(actions::load_topics(&forum, &names).await, "Failed to fetch topics");

        state.begin_edit(2, "about 2");
        state.set_edit_text("rewritten");
        let patch = TopicPatch {
            description: state.edit_text(2).unwrap_or_default().to_string(),
        };
        let result = actions::update_topic(&forum, &names, 2, patch).await;
        assert!(state.settle(result, "Failed to update topic"));

        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.get(2).unwrap().record.description, "rewritten");
        assert!(state.editing.is_none());
    }

    #[tokio::test]
    async fn test_failed_lookup_leaves_list_empty() {
        let forum = forum();
        forum.add_user("9", "carol");
        forum.fail_lookups_for("9");
        forum.add_post(post(1, "7"));
        forum.add_post(post(2, "8"));
        forum.add_post(post(3, "9"));
        let names = UsernameCache::new();
        let mut state = ListState::new();

        let ok = state.settle(actions::load_posts(&forum, &names, 1).await, "Failed to fetch posts");

        assert!(!ok);
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("Failed to fetch posts."));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_empty_comment_is_rejected_locally() {
        let forum = forum();
        forum.add_post(post(2, "7"));
        let names = UsernameCache::new();
        let mut state = ListState::new();
        state.settle(actions::load_comments(&forum, &names, 1, 2).await, "Failed to fetch post or comments");
        let before = forum.requests().len();

        let input = NewComment {
            content: "   ".to_string(),
        };
        let result = actions::create_comment(&forum, &names, 1, 2, input).await;

        assert!(!state.settle(result, "Failed to create comment"));
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("Comment cannot be empty"));
        assert_eq!(forum.requests().len(), before);
    }

    #[tokio::test]
    async fn test_create_appends_and_clears_error() {
        let forum = forum();
        forum.add_topic(topic(1, "8"));
        let names = UsernameCache::new();
        let mut state = ListState::new();
        state.settle(actions::load_topics(&forum, &names).await, "Failed to fetch topics");
        state.settle(
            actions::create_topic(&forum, &names, NewTopic::default()).await,
            "Failed to create topic",
        );
        assert!(state.error.is_some());

        let input = NewTopic {
            title: "Fresh".to_string(),
            description: "Just started".to_string(),
        };
        let result = actions::create_topic(&forum, &names, input).await;
        assert!(state.settle(result, "Failed to create topic"));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].record.title, "Fresh");
        assert_eq!(state.items[1].owner_name, "alice");
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_failed_update_keeps_edit_mode() {
        let forum = forum();
        forum.add_post(post(1, "7"));
        let names = UsernameCache::new();
        let mut state = ListState::new();
        state.settle(actions::load_posts(&forum, &names, 1).await, "Failed to fetch posts");
        state.begin_edit(1, "draft");

        forum.set_offline(true);
        let patch = PostPatch {
            body: "draft".to_string(),
        };
        let result = actions::update_post(&forum, &names, 1, 1, patch).await;

        assert!(!state.settle(result, "Failed to update post"));
        assert!(state.is_editing(1));
        assert_eq!(state.get(1).unwrap().record.body, "body");
        assert_eq!(state.error.as_deref(), Some("Failed to update post."));
    }

    #[test]
    fn test_update_without_title_keeps_old_title() {
        let mut state: ListState<Post> = ListState::new();
        state.apply(Change::Loaded(vec![
            Enriched::new(post(2, "8"), "bob"),
            Enriched::new(post(1, "7"), "alice"),
            Enriched::new(post(3, "7"), "alice"),
        ]));
        state.begin_edit(1, "body");

        let updated: Post = serde_json::from_str(r#"{"id":1,"body":"new","userId":7}"#).unwrap();
        state.apply(Change::Updated(Enriched::new(updated, "alice")));

        assert_eq!(ids(&state), vec![2, 1, 3]);
        let entry = state.get(1).unwrap();
        assert_eq!(entry.record.title, "Post 1");
        assert_eq!(entry.record.body, "new");
        assert_eq!(entry.record.topic_id, Some(1));
        assert!(state.editing.is_none());
    }

    #[tokio::test]
    async fn test_envelope_list_enriched_then_deleted_locally() {
        let body = r#"{"$id":"1","$values":[
            {"$id":"2","id":1,"title":"Hello","body":"first","userId":7,"topicId":1},
            {"$id":"3","id":2,"title":"Again","body":"second","userId":8,"topicId":1}
        ]}"#;
        let posts = serde_json::from_str::<ListResponse<Post>>(body).unwrap().into_vec();
        assert_eq!(posts.len(), 2);

        let forum = forum();
        for p in &posts {
            forum.add_post(p.clone());
        }
        let names = UsernameCache::new();
        let mut state = ListState::new();
        state.apply(Change::Loaded(names.enrich_all(&forum, posts).await.unwrap()));

        assert_eq!(state.get(1).unwrap().owner_name, "alice");
        assert_eq!(state.get(2).unwrap().owner_label(), "bob");
        assert_eq!(forum.lookups(), 2);

        let result = actions::delete_post(&forum, 1, 1).await;
        assert!(state.settle(result, "Failed to delete post"));
        assert_eq!(ids(&state), vec![2]);
        assert_eq!(forum.requests(), vec!["DELETE /api/topics/1/posts/1".to_string()]);
    }

    #[tokio::test]
    async fn test_comment_edit_round() {
        let forum = forum();
        forum.add_post(post(2, "7"));
        forum.add_comment(Comment {
            id: 5,
            content: "first!".to_string(),
            user_id: UserId::from("8"),
            post_id: Some(2),
        });
        forum.act_as("8");
        let names = UsernameCache::new();
        let mut state = ListState::new();
        let loaded = actions::load_comments(&forum, &names, 1, 2).await;
        assert!(state.settle(loaded, "Failed to fetch post or comments"));
        assert_eq!(state.get(5).unwrap().owner_name, "bob");

        state.begin_edit(5, "first!");
        state.set_edit_text("second thoughts");
        let patch = CommentPatch {
            content: state.edit_text(5).unwrap_or_default().to_string(),
        };
        let result = actions::update_comment(&forum, &names, 1, 2, 5, patch).await;
        assert!(state.settle(result, "Failed to update comment"));

        let entry = state.get(5).unwrap();
        assert_eq!(entry.record.content, "second thoughts");
        assert_eq!(entry.record.post_id, Some(2));
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_single_edit_mode() {
        let mut state: ListState<Post> = ListState::new();
        state.begin_edit(1, "one");
        state.begin_edit(2, "two");

        assert!(!state.is_editing(1));
        assert_eq!(state.edit_text(2), Some("two"));
        assert_eq!(state.edit_text(1), None);

        state.cancel_edit();
        assert!(state.editing.is_none());
        state.set_edit_text("ignored");
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_delete_of_edited_record_leaves_edit_mode() {
        let mut state: ListState<Post> = ListState::new();
        state.apply(Change::Loaded(vec![Enriched::new(post(1, "7"), "alice")]));
        state.begin_edit(1, "text");

        state.apply(Change::Deleted(1));
        assert!(state.items.is_empty());
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_create_post_requires_both_fields() {
        let input = NewPost {
            title: "Only a title".to_string(),
            body: String::new(),
        };
        let err = input.validate().unwrap_err();
        let mut state: ListState<Post> = ListState::new();
        state.fail(&err, "Failed to create post");
        assert_eq!(state.error.as_deref(), Some("Title and Body are required"));
    }
}
