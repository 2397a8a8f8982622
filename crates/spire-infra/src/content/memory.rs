//! In-memory content store - the canonical post collection.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use spire_core::domain::{NewPost, Post};
use spire_core::error::StoreError;
use spire_core::ports::ContentStore;

use super::seed;

/// In-memory content store holding posts most-recent-first.
///
/// Note: Data is lost on process restart.
pub struct InMemoryContentStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Start from an existing ordered collection, newest first.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Store pre-filled with the starter marketing posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed::starter_posts())
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn add(&self, draft: NewPost) -> Result<Post, StoreError> {
        let post = Post::new(draft);
        let mut posts = self.posts.write().await;
        posts.insert(0, post.clone());
        tracing::debug!(id = %post.id, "post added");
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => {
                *slot = post;
                Ok(())
            }
            None => Err(StoreError::NotFound(post.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(StoreError::NotFound(id));
        }
        tracing::debug!(%id, "post deleted");
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }
}
