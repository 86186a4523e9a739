//! In-memory settings store
//!
//! Development and test backend. Values live in a process-local map keyed
//! by (scope, scope id, path); nothing is persisted.

use crate::adapters::store::traits::{value_as_flag, SettingsStore};
use crate::domain::settings::ConfigScope;
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Scope id under which values are resolved on read
const READ_SCOPE_ID: u32 = 0;

/// Settings store backed by a process-local map
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<(ConfigScope, u32, String), String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values currently held
    pub fn len(&self) -> usize {
        self.values.lock().expect("store mutex poisoned").len()
    }

    /// Whether the store holds no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve(&self, path: &str, scope: ConfigScope) -> Option<String> {
        let values = self.values.lock().expect("store mutex poisoned");
        let lookup = |scope: ConfigScope| {
            values
                .get(&(scope, READ_SCOPE_ID, path.to_string()))
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
impl SettingsStore for MemoryStore {
    async fn get_flag(&self, path: &str, scope: ConfigScope) -> Result<bool> {
        let value = self.resolve(path, scope).unwrap_or_default();
        Ok(value_as_flag(&value))
    }

    async fn get_value(&self, path: &str, scope: ConfigScope) -> Result<String> {
        Ok(self.resolve(path, scope).unwrap_or_default())
    }

    async fn save(
        &self,
        path: &str,
        value: &str,
        scope: ConfigScope,
        scope_id: u32,
    ) -> Result<()> {
        self.values
            .lock()
            .expect("store mutex poisoned")
            .insert((scope, scope_id, path.to_string()), value.to_string());
        Ok(())
    }
}
