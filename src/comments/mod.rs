//! Per-item comment lists persisted under `comments_<itemId>`.

use std::sync::Arc;

use chrono::Local;

use crate::errors::AppError;
use crate::models::Comment;
use crate::storage::{keys, read_json, write_json, KeyValueStore};

/// Display format for comment timestamps, e.g. "3/14/2025, 9:05:12 AM".
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Clone)]
pub struct CommentStore {
    store: Arc<dyn KeyValueStore>,
    author: String,
}

impl CommentStore {
    pub fn new(store: Arc<dyn KeyValueStore>, author: impl Into<String>) -> Self {
        Self {
            store,
            author: author.into(),
        }
    }

    /// The device's stored list for an item, or `seed` if nothing was stored yet.
    pub async fn load_comments(
        &self,
        item_id: &str,
        seed: &[Comment],
    ) -> Result<Vec<Comment>, AppError> {
        let stored: Option<Vec<Comment>> =
            read_json(self.store.as_ref(), &keys::comments(item_id)).await?;
        Ok(stored.unwrap_or_else(|| seed.to_vec()))
    }

    /// Append a comment and persist the whole list.
    ///
    /// Blank text is ignored: nothing is written and the current list is returned.
    pub async fn add_comment(
        &self,
        item_id: &str,
        seed: &[Comment],
        text: &str,
    ) -> Result<Vec<Comment>, AppError> {
        let mut comments = self.load_comments(item_id, seed).await?;
        if text.trim().is_empty() {
            tracing::debug!(item_id, "Ignoring blank comment");
            return Ok(comments);
        }

        comments.push(Comment {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            author: self.author.clone(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        });

        write_json(self.store.as_ref(), &keys::comments(item_id), &comments).await?;
        tracing::info!(item_id, count = comments.len(), "Comment added");

        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Catalog;
    use crate::storage::MemoryStore;

    fn setup() -> (CommentStore, Arc<MemoryStore>, Vec<Comment>) {
        let memory = Arc::new(MemoryStore::new());
        let comments = CommentStore::new(memory.clone(), "Anonymous User");
        let seed = Catalog::sample().get("tech-1").unwrap().comments.clone();
        (comments, memory, seed)
    }

    #[tokio::test]
    async fn test_load_falls_back_to_seed() {
        let (comments, _, seed) = setup();
        let loaded = comments.load_comments("tech-1", &seed).await.unwrap();
        assert_eq!(loaded, seed);
    }

    #[tokio::test]
    async fn test_empty_comment_is_ignored() {
        let (comments, memory, seed) = setup();

        let list = comments.add_comment("tech-1", &seed, "").await.unwrap();
        assert_eq!(list, seed);
        let list = comments.add_comment("tech-1", &seed, "   \n\t").await.unwrap();
        assert_eq!(list, seed);

        assert_eq!(memory.get("comments_tech-1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_appends_exactly_one() {
        let (comments, _, seed) = setup();

        let list = comments.add_comment("tech-1", &seed, "hello").await.unwrap();
        assert_eq!(list.len(), seed.len() + 1);
        assert_eq!(&list[..seed.len()], &seed[..]);

        let added = list.last().unwrap();
        assert_eq!(added.text, "hello");
        assert_eq!(added.author, "Anonymous User");
        assert!(!added.id.is_empty());
        assert!(!added.timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_comments_persist_in_order() {
        let (comments, _, seed) = setup();

        comments.add_comment("tech-1", &seed, "first").await.unwrap();
        comments.add_comment("tech-1", &seed, "second").await.unwrap();

        let loaded = comments.load_comments("tech-1", &seed).await.unwrap();
        let texts: Vec<&str> = loaded.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts[texts.len() - 2..], ["first", "second"]);

        let ids: std::collections::HashSet<&str> = loaded.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), loaded.len());
    }

    #[tokio::test]
    async fn test_lists_are_per_item() {
        let (comments, _, seed) = setup();
        comments.add_comment("tech-1", &seed, "only here").await.unwrap();

        let other = comments.load_comments("sports-1", &[]).await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_list_reads_as_seed() {
        let (comments, memory, seed) = setup();
        memory.set("comments_tech-1", "[{\"id\":1}]").await.unwrap();

        let loaded = comments.load_comments("tech-1", &seed).await.unwrap();
        assert_eq!(loaded, seed);
    }
}
