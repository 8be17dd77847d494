//! In-memory store for tests and ephemeral runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStore;
use crate::errors::AppError;

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("isContributor").await.unwrap(), None);

        store.set("isContributor", "true").await.unwrap();
        assert_eq!(
            store.get("isContributor").await.unwrap().as_deref(),
            Some("true")
        );

        store.set("isContributor", "false").await.unwrap();
        assert_eq!(
            store.get("isContributor").await.unwrap().as_deref(),
            Some("false")
        );

        store.remove("isContributor").await.unwrap();
        assert_eq!(store.get("isContributor").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("userData").await.unwrap();
        assert_eq!(store.get("userData").await.unwrap(), None);
    }
}
