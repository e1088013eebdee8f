//! In-memory post store - used when no storage path is configured.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use masterblog_core::domain::{Post, PostDraft, PostPatch};
use masterblog_core::error::RepoError;
use masterblog_core::ports::PostRepository;

/// In-memory post store backed by a `Vec` with an async RwLock.
///
/// Ids come from a running counter, so they stay monotonically
/// increasing for the lifetime of the process even across deletes.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicU64,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Seed the store with existing posts. The counter resumes past
    /// the highest seeded id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let max_id = posts.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            posts: RwLock::new(posts),
            next_id: AtomicU64::new(max_id + 1),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            date: draft.date,
        };
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: u64, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                patch.apply(post);
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: u64) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }
}
