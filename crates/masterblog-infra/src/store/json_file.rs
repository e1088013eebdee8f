//! JSON-file post store - serializes the whole collection to a single
//! flat file on every mutation.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use masterblog_core::domain::{Post, PostDraft, PostPatch};
use masterblog_core::error::RepoError;
use masterblog_core::ports::PostRepository;

/// Flat-file post store. Every operation is a full read of the file;
/// every mutation is a full rewrite.
///
/// A process-local mutex serializes writers. There is no cross-process
/// locking; a second process writing the same file can lose updates.
pub struct JsonFilePostStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read and parse the whole file. A missing file is an empty store.
    async fn load(&self) -> Result<Vec<Post>, RepoError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| RepoError::Serialization(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(RepoError::Storage(e.to_string())),
        }
    }

    /// Rewrite the whole file.
    async fn persist(&self, posts: &[Post]) -> Result<(), RepoError> {
        let bytes = serde_json::to_vec_pretty(posts)
            .map_err(|e| RepoError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| RepoError::Storage(e.to_string()))?;
        tracing::debug!("Persisted {} posts to {}", posts.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl PostRepository for JsonFilePostStore {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        self.load().await
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Post>, RepoError> {
        Ok(self.load().await?.into_iter().find(|p| p.id == id))
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;

        // Max existing id + 1, so ids survive process restarts.
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = Post {
            id: next_id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            date: draft.date,
        };
        posts.push(post.clone());
        self.persist(&posts).await?;
        Ok(post)
    }

    async fn update(&self, id: u64, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;

        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply(post);
        let updated = post.clone();
        self.persist(&posts).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: u64) -> Result<bool, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;

        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Ok(false);
        }
        self.persist(&posts).await?;
        Ok(true)
    }
}
