use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post};
use crate::error::StoreError;

/// Content store - owns the ordered post collection and all mutation of it.
///
/// The store performs no field validation; well-formedness is the caller's
/// contract (see `PostDraft` in `spire-shared`).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Assign an identity and insert the post at the front of the collection
    /// (most-recent-first). Returns the created post.
    async fn add(&self, draft: NewPost) -> Result<Post, StoreError>;

    /// Replace the entry whose id matches `post.id`, keeping its position.
    /// An unknown id is `StoreError::NotFound`.
    async fn update(&self, post: Post) -> Result<(), StoreError>;

    /// Remove the entry with the given id.
    /// An unknown id is `StoreError::NotFound`.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Linear lookup by id.
    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Snapshot of the collection, newest first.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;
}
