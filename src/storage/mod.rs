//! Device-local key-value storage.
//!
//! Every persisted record lives under a string key, mirroring browser local storage.
//! The engine only sees the [`KeyValueStore`] trait so tests can run against memory.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppError;

/// Record keys.
pub mod keys {
    pub const USER_DATA: &str = "userData";
    pub const IS_CONTRIBUTOR: &str = "isContributor";

    pub fn vote(item_id: &str) -> String {
        format!("newsVote_{}", item_id)
    }

    pub fn comments(item_id: &str) -> String {
        format!("comments_{}", item_id)
    }
}

/// Get/set/remove by key. Each call is atomic on its own; there are no transactions.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    async fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Read and decode a JSON record. Malformed records are treated as absent.
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, AppError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring malformed stored record");
            Ok(None)
        }
    }
}

/// Encode a value as JSON and store it.
pub async fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoredVote;

    #[test]
    fn test_key_patterns() {
        assert_eq!(keys::vote("tech-1"), "newsVote_tech-1");
        assert_eq!(keys::comments("sports-1"), "comments_sports-1");
    }

    #[tokio::test]
    async fn test_json_roundtrip() {
        let store = MemoryStore::new();
        let vote = StoredVote {
            upvoted: true,
            downvoted: false,
        };
        write_json(&store, "newsVote_x", &vote).await.unwrap();

        let raw = store.get("newsVote_x").await.unwrap().unwrap();
        assert_eq!(raw, r#"{"upvoted":true,"downvoted":false}"#);

        let loaded: Option<StoredVote> = read_json(&store, "newsVote_x").await.unwrap();
        assert_eq!(loaded, Some(vote));
    }

    #[tokio::test]
    async fn test_malformed_record_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("newsVote_x", "{not json").await.unwrap();

        let loaded: Option<StoredVote> = read_json(&store, "newsVote_x").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_missing_record_reads_as_absent() {
        let store = MemoryStore::new();
        let loaded: Option<StoredVote> = read_json(&store, "newsVote_x").await.unwrap();
        assert!(loaded.is_none());
    }
}
