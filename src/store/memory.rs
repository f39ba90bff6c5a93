//! In-memory blog store.

use super::{BlogRepository, Result, StoreError};
use crate::models::{BlogFields, BlogId, BlogInput, BlogRecord};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Blog store kept entirely in process memory.
///
/// Records are kept in insertion order. Ids come from a counter that only
/// ever increases, so a deleted id is never handed out again.
#[derive(Debug, Default)]
pub struct MemoryBlogStore {
    blogs: RwLock<IndexMap<BlogId, BlogRecord>>,
    sequence: AtomicU64,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of blogs, validating each entry like a create request.
    ///
    /// Any `id` present in the file is ignored; fresh ids are assigned.
    pub async fn seed_from_file(&self, path: &Path) -> Result<usize> {
        let content = tokio::fs::read_to_string(path).await?;

        let entries: Vec<BlogInput> =
            serde_json::from_str(&content).map_err(|e| StoreError::InvalidSeed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut fields = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let validated = entry.validate().map_err(|e| StoreError::InvalidSeed {
                path: path.to_path_buf(),
                reason: format!("entry {}: {}", index, e),
            })?;
            fields.push(validated);
        }

        let count = fields.len();
        for f in fields {
            self.create(f).await?;
        }

        info!("Seeded {} blogs from {}", count, path.display());
        Ok(count)
    }

    fn next_id(&self) -> BlogId {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let timestamp = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        BlogId::new(timestamp, sequence)
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogStore {
    async fn create(&self, fields: BlogFields) -> Result<BlogRecord> {
        let record = BlogRecord::from_fields(self.next_id(), fields);

        self.blogs.write().await.insert(record.id, record.clone());
        debug!("Created blog {} (#{})", record.id, record.id.sequence());

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<BlogRecord>> {
        Ok(self.blogs.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &BlogId) -> Result<Option<BlogRecord>> {
        Ok(self.blogs.read().await.get(id).cloned())
    }

    async fn replace(&self, id: &BlogId, fields: BlogFields) -> Result<Option<BlogRecord>> {
        let mut blogs = self.blogs.write().await;

        match blogs.get_mut(id) {
            Some(existing) => {
                *existing = BlogRecord::from_fields(*id, fields);
                debug!("Replaced blog {}", id);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &BlogId) -> Result<bool> {
        let removed = self.blogs.write().await.shift_remove(id).is_some();
        if removed {
            debug!("Deleted blog {}", id);
        }
        Ok(removed)
    }
}
