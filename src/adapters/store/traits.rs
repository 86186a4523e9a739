//! Settings store abstraction trait
//!
//! This module defines the trait that backing configuration stores must
//! implement. The core treats the store as an opaque scoped key/value
//! service: writes are durable once `save` returns.

use crate::domain::settings::ConfigScope;
use crate::domain::Result;
use async_trait::async_trait;

/// Scoped key/value store for string-valued settings
///
/// Keys are hierarchical paths such as `livechat/general/license`. Every
/// value is read and written under a [`ConfigScope`]; administrative
/// writes additionally carry a numeric scope id.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a boolean flag
    ///
    /// A flag is false when its stored value is missing, empty, or `"0"`,
    /// and true otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn get_flag(&self, path: &str, scope: ConfigScope) -> Result<bool>;

    /// Read a string value
    ///
    /// A key that was never written reads as the empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn get_value(&self, path: &str, scope: ConfigScope) -> Result<String>;

    /// Write a string value under the given scope and scope id
    ///
    /// The write is durable once this call returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    async fn save(&self, path: &str, value: &str, scope: ConfigScope, scope_id: u32)
        -> Result<()>;
}

/// Flag semantics shared by store implementations
pub(crate) fn value_as_flag(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_semantics() {
        assert!(!value_as_flag(""));
        assert!(!value_as_flag("0"));
        assert!(value_as_flag("1"));
        assert!(value_as_flag("true"));
        assert!(value_as_flag("yes"));
    }
}
