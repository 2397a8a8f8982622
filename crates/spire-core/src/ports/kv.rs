use async_trait::async_trait;

/// Key-value store trait - abstraction over browser-local-style persistence.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value from the store.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value in the store.
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Remove a key from the store. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KvError>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> bool;
}

/// Key-value store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
