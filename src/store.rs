//! The post record and its in-memory store.
//!
//! The store is the sole owner of the collection. Ids are handed out in
//! strictly increasing order starting at 1 and are never reused; a deleted
//! post stays in the collection with its `removed` flag set, so the store
//! only ever grows. Mutating operations return an owned copy of the updated
//! record — callers never hold references into the store past a request.

use chrono::Utc;
use serde::Serialize;

/// A single post.
#[derive(Clone, Debug, Serialize)]
pub struct Post {
    pub id: u64,
    pub content: String,
    /// Soft-delete flag: a removed post is invisible to listings and
    /// lookups but remains in the store, ready to be restored.
    pub removed: bool,
    /// Creation time, milliseconds since the Unix epoch. Immutable.
    pub created: i64,
}

/// Ordered collection of posts plus the id generator.
///
/// Newest posts sit at the front; [`list`](PostStore::list) returns them in
/// that order.
#[derive(Debug)]
pub struct PostStore {
    posts: Vec<Post>,
    next_id: u64,
}

impl PostStore {
    pub fn new() -> Self {
        Self { posts: Vec::new(), next_id: 1 }
    }

    /// Creates a post with the next id and the current timestamp, prepends
    /// it to the collection, and returns a copy. Never fails.
    pub fn create(&mut self, content: impl Into<String>) -> Post {
        let post = Post {
            id: self.next_id,
            content: content.into(),
            removed: false,
            created: Utc::now().timestamp_millis(),
        };
        self.next_id += 1;
        self.posts.insert(0, post.clone());
        post
    }

    /// Returns posts in current order, newest first. With
    /// `include_removed = false`, soft-deleted posts are filtered out.
    pub fn list(&self, include_removed: bool) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| include_removed || !post.removed)
            .cloned()
            .collect()
    }

    /// Full scan for the post with `id`, removed or not.
    pub fn find_by_id(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Sets the `removed` flag on the post with `id` and returns the updated
    /// record, or `None` if no such post exists.
    pub fn set_removed(&mut self, id: u64, removed: bool) -> Option<Post> {
        let post = self.posts.iter_mut().find(|post| post.id == id)?;
        post.removed = removed;
        Some(post.clone())
    }

    /// Replaces the content of the post with `id` and returns the updated
    /// record, or `None` if no such post exists.
    pub fn set_content(&mut self, id: u64, content: impl Into<String>) -> Option<Post> {
        let post = self.posts.iter_mut().find(|post| post.id == id)?;
        post.content = content.into();
        Some(post.clone())
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing_from_one() {
        let mut store = PostStore::new();
        let ids: Vec<u64> = (0..5).map(|i| store.create(format!("post {i}")).id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn list_is_newest_first() {
        let mut store = PostStore::new();
        store.create("first");
        store.create("second");
        store.create("third");

        let listed = store.list(false);
        let contents: Vec<&str> = listed.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["third", "second", "first"]);
    }

    #[test]
    fn new_posts_start_active() {
        let mut store = PostStore::new();
        let post = store.create("hello");
        assert!(!post.removed);
        assert!(post.created > 0);
    }

    #[test]
    fn list_filters_removed_posts() {
        let mut store = PostStore::new();
        store.create("keep");
        let doomed = store.create("drop");
        store.set_removed(doomed.id, true);

        let visible = store.list(false);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].content, "keep");

        // The removed post is still in the store.
        assert_eq!(store.list(true).len(), 2);
        assert!(store.find_by_id(doomed.id).is_some());
    }

    #[test]
    fn find_by_id_scans_past_non_matching_posts() {
        let mut store = PostStore::new();
        let oldest = store.create("oldest");
        store.create("middle");
        store.create("newest");

        // The oldest post sits last in the collection; the scan must reach it.
        assert_eq!(store.find_by_id(oldest.id).map(|p| p.id), Some(oldest.id));
        assert!(store.find_by_id(99).is_none());
    }

    #[test]
    fn set_removed_round_trips() {
        let mut store = PostStore::new();
        let post = store.create("hello");

        let removed = store.set_removed(post.id, true).unwrap();
        assert!(removed.removed);

        let restored = store.set_removed(post.id, false).unwrap();
        assert!(!restored.removed);

        assert!(store.set_removed(42, true).is_none());
    }

    #[test]
    fn set_content_preserves_id_and_created() {
        let mut store = PostStore::new();
        let post = store.create("before");

        let updated = store.set_content(post.id, "after").unwrap();
        assert_eq!(updated.id, post.id);
        assert_eq!(updated.created, post.created);
        assert_eq!(updated.content, "after");

        assert!(store.set_content(42, "nope").is_none());
    }

    #[test]
    fn post_serializes_with_all_fields() {
        let mut store = PostStore::new();
        let post = store.create("hello");

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["content"], "hello");
        assert_eq!(value["removed"], false);
        assert!(value["created"].is_i64());
    }
}
