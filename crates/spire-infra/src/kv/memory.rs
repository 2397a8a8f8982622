//! In-memory key-value store - stands in for browser-local storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use spire_core::ports::{KeyValueStore, KvError};

/// In-memory key-value store using a simple HashMap with async RwLock.
///
/// Note: Entries are lost on process restart.
pub struct InMemoryKvStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Option<String> {
        // Async read lock - doesn't block the executor
        let store = self.store.read().await;
        store.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KvError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> bool {
        self.get(key).await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryKvStore::new();
        store.set("key1", "value1").await.unwrap();
        assert_eq!(store.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryKvStore::new();
        store.set("key1", "value1").await.unwrap();
        store.remove("key1").await.unwrap();
        assert_eq!(store.get("key1").await, None);
        assert!(!store.exists("key1").await);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_ok() {
        let store = InMemoryKvStore::new();
        assert!(store.remove("missing").await.is_ok());
    }
}
