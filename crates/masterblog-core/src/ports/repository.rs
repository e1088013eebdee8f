use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostPatch};
use crate::error::RepoError;

/// Post store - the authoritative collection of posts.
///
/// Implementations assign ids on create and keep insertion order on list.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in insertion order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: u64) -> Result<Option<Post>, RepoError>;

    /// Assign a fresh id, append the post, return it.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Apply a partial update. Returns `None` for an unknown id.
    async fn update(&self, id: u64, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Remove a post by id. Returns whether anything was removed.
    async fn delete(&self, id: u64) -> Result<bool, RepoError>;
}
