//! # Owner-name lookups and enrichment
//!
//! Records only carry an owner id. Before a list renders, every record is
//! paired with its owner's display name ("enrichment").
//!
//! - Lookups are memoised per user id in a [`UsernameCache`] that lives as
//!   long as the session, so a page of twenty posts by three authors costs
//!   three requests the first time and none afterwards.
//! - [`UsernameCache::enrich_all`] fans out over the distinct uncached ids
//!   with join-all semantics: if any lookup fails the whole step fails and
//!   no record is returned with partial data.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use futures::future::try_join_all;

use crate::backend::ForumBackend;
use crate::models::{Enriched, Record, UserId};
use crate::ApiError;

/// Session-scoped memo of user id → display name.
#[derive(Clone, Debug, Default)]
pub struct UsernameCache {
    names: Rc<RefCell<HashMap<UserId, String>>>,
}

impl UsernameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user: &UserId) -> Option<String> {
        self.names.borrow().get(user).cloned()
    }

    pub fn clear(&self) {
        self.names.borrow_mut().clear();
    }

    /// Display name for `user`, asking the backend on a cache miss.
    pub async fn resolve<B: ForumBackend>(
        &self,
        backend: &B,
        user: &UserId,
    ) -> Result<String, ApiError> {
        if let Some(name) = self.get(user) {
            return Ok(name);
        }
        let name = backend.lookup_username(user).await?;
        self.names.borrow_mut().insert(user.clone(), name.clone());
        Ok(name)
    }

    /// Pair one record with its owner's name.
    pub async fn enrich<B: ForumBackend, R: Record>(
        &self,
        backend: &B,
        record: R,
    ) -> Result<Enriched<R>, ApiError> {
        let name = self.resolve(backend, record.owner()).await?;
        Ok(Enriched::new(record, name))
    }

    /// Pair every record with its owner's name, preserving order.
    ///
    /// All missing names are fetched concurrently; the first failure fails
    /// the whole batch.
    pub async fn enrich_all<B: ForumBackend, R: Record>(
        &self,
        backend: &B,
        records: Vec<R>,
    ) -> Result<Vec<Enriched<R>>, ApiError> {
        let missing: BTreeSet<&UserId> = records
            .iter()
            .map(Record::owner)
            .filter(|user| self.get(user).is_none())
            .collect();

        let fetched = try_join_all(missing.into_iter().map(|user| async move {
            let name = backend.lookup_username(user).await?;
            Ok::<_, ApiError>((user.clone(), name))
        }))
        .await?;

        self.names.borrow_mut().extend(fetched);

        Ok(records
            .into_iter()
            .map(|record| {
                let name = self.get(record.owner()).unwrap_or_default();
                Enriched::new(record, name)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Topic;
    use crate::MemoryForum;

    fn topic(id: i64, owner: &str) -> Topic {
        Topic {
            id,
            title: format!("topic {id}"),
            description: String::new(),
            user_id: UserId::from(owner),
        }
    }

    #[tokio::test]
    async fn test_one_lookup_per_distinct_owner() {
        let forum = MemoryForum::new();
        forum.add_user("7", "alice");
        forum.add_user("8", "bob");
        let cache = UsernameCache::new();

        let records = vec![topic(1, "7"), topic(2, "8"), topic(3, "7")];
        let enriched = cache.enrich_all(&forum, records).await.unwrap();

        let names: Vec<&str> = enriched.iter().map(|e| e.owner_name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "alice"]);
        assert_eq!(forum.lookups(), 2);

        // Second pass is served from the cache
        let again = cache.enrich_all(&forum, vec![topic(4, "8")]).await.unwrap();
        assert_eq!(again[0].owner_name, "bob");
        assert_eq!(forum.lookups(), 2);
    }

    #[tokio::test]
    async fn test_any_failed_lookup_fails_the_batch() {
        let forum = MemoryForum::new();
        forum.add_user("7", "alice");
        forum.add_user("8", "bob");
        forum.fail_lookups_for("9");
        let cache = UsernameCache::new();

        let records = vec![topic(1, "7"), topic(2, "8"), topic(3, "9")];
        let result = cache.enrich_all(&forum, records).await;
        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_single_enrich_uses_cache() {
        let forum = MemoryForum::new();
        forum.add_user("7", "alice");
        let cache = UsernameCache::new();

        cache.enrich(&forum, topic(1, "7")).await.unwrap();
        let second = cache.enrich(&forum, topic(2, "7")).await.unwrap();

        assert_eq!(second.owner_name, "alice");
        assert_eq!(forum.lookups(), 1);
        assert_eq!(cache.get(&UserId::from("7")).as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_clear_forces_new_lookups() {
        let forum = MemoryForum::new();
        forum.add_user("7", "alice");
        let cache = UsernameCache::new();

        cache.resolve(&forum, &UserId::from("7")).await.unwrap();
        cache.clear();
        assert_eq!(cache.get(&UserId::from("7")), None);
        cache.resolve(&forum, &UserId::from("7")).await.unwrap();
        assert_eq!(forum.lookups(), 2);
    }
}
