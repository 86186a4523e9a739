//! Filesystem cache invalidator
//!
//! Cache categories are subdirectories of a cache root. Invalidation
//! removes the category's directory; consumers rebuild it lazily on the
//! next fill.

use crate::adapters::cache::traits::CacheInvalidator;
use crate::domain::{LiveChatError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Cache invalidator over a cache directory tree
pub struct FsCacheInvalidator {
    root: PathBuf,
}

impl FsCacheInvalidator {
    /// Create an invalidator over the given cache root
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory holding the given category
    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.root.join(category)
    }
}

#[async_trait]
impl CacheInvalidator for FsCacheInvalidator {
    async fn invalidate(&self, category: &str) -> Result<()> {
        let dir = self.category_dir(category);

        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => {
                tracing::debug!(category = category, "Cache category invalidated");
                Ok(())
            }
            // Nothing cached for this category yet
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LiveChatError::Cache(format!(
                "failed to invalidate category '{category}' at {}: {e}",
                dir.display()
            ))),
        }
    }
}
