//! Blog persistence.
//!
//! The HTTP layer talks to storage only through [`BlogRepository`], so the
//! backing engine can be swapped without touching handlers.

pub mod memory;

use crate::models::{BlogFields, BlogId, BlogRecord};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use memory::MemoryBlogStore;

/// Errors raised by a blog store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid seed file {path}: {reason}")]
    InvalidSeed { path: PathBuf, reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Create/read/update/delete access to the blog collection.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    /// Stores a new blog and returns it with its assigned id.
    async fn create(&self, fields: BlogFields) -> Result<BlogRecord>;

    /// Returns every blog in insertion order.
    async fn list(&self) -> Result<Vec<BlogRecord>>;

    /// Returns `None` if the id does not exist.
    async fn get(&self, id: &BlogId) -> Result<Option<BlogRecord>>;

    /// Replaces all mutable fields of a blog.
    /// Returns `None` if the id does not exist.
    async fn replace(&self, id: &BlogId, fields: BlogFields) -> Result<Option<BlogRecord>>;

    /// Removes a blog. Returns `true` if the record existed.
    async fn delete(&self, id: &BlogId) -> Result<bool>;
}
