//! JSON-file-backed settings store
//!
//! Persists scoped settings as nested JSON: scope, then scope id, then
//! hierarchical path. Every call re-reads the file and every write goes
//! through a read-modify-write cycle serialized by an internal mutex, so
//! the store itself holds no in-memory state between calls.

use crate::adapters::store::traits::{value_as_flag, SettingsStore};
use crate::domain::errors::StoreError;
use crate::domain::settings::ConfigScope;
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// scope -> scope id -> path -> value
type ScopeTree = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Scope id under which values are resolved on read
const READ_SCOPE_ID: u32 = 0;

/// Settings store backed by a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given file
    ///
    /// The file does not need to exist yet; a missing file reads as an
    /// empty store and is created by the first write.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn load(&self) -> Result<ScopeTree> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ScopeTree::new()),
            Err(e) => {
                return Err(StoreError::Unavailable(format!(
                    "cannot read {}: {e}",
                    self.path.display()
                ))
                .into())
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::Unavailable(format!("corrupt store file {}: {e}", self.path.display()))
                .into()
        })
    }

    async fn persist(&self, tree: &ScopeTree) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(tree).map_err(|e| {
            StoreError::Unavailable(format!("cannot serialize store: {e}"))
        })?;

        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            StoreError::Unavailable(format!("cannot write {}: {e}", self.path.display())).into()
        })
    }

    /// Resolve a value under the given scope, with the store view falling
    /// back to the default scope for values never overridden at store
    /// level.
    fn resolve(tree: &ScopeTree, path: &str, scope: ConfigScope) -> Option<String> {
        let lookup = |scope: ConfigScope| {
            tree.get(scope.as_str())
                .and_then(|ids| ids.get(&READ_SCOPE_ID.to_string()))
                .and_then(|values| values.get(path))
                .cloned()
        };

        match lookup(scope) {
            Some(value) => Some(value),
            None if scope == ConfigScope::Store => lookup(ConfigScope::Default),
            None => None,
        }
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn get_flag(&self, path: &str, scope: ConfigScope) -> Result<bool> {
        let value = self.get_value(path, scope).await?;
        Ok(value_as_flag(&value))
    }

    async fn get_value(&self, path: &str, scope: ConfigScope) -> Result<String> {
        let tree = self.load().await?;
        Ok(Self::resolve(&tree, path, scope).unwrap_or_default())
    }

    async fn save(
        &self,
        path: &str,
        value: &str,
        scope: ConfigScope,
        scope_id: u32,
    ) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut tree = self.load().await?;
        tree.entry(scope.as_str().to_string())
            .or_default()
            .entry(scope_id.to_string())
            .or_default()
            .insert(path.to_string(), value.to_string());

        self.persist(&tree).await
    }
}
