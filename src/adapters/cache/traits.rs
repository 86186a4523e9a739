//! Cache invalidator abstraction trait

use crate::domain::Result;
use async_trait::async_trait;

/// Invalidates named cache categories
///
/// A cache category is a named group of cached artifacts that must be
/// recomputed after a configuration change. Invalidating a category that
/// holds nothing is a successful no-op.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate one cache category
    ///
    /// # Errors
    ///
    /// Returns an error if the category exists but cannot be invalidated.
    async fn invalidate(&self, category: &str) -> Result<()>;
}
