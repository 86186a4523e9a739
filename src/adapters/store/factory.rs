//! Settings store factory
//!
//! This module provides a factory function to create the settings store
//! selected by the application configuration.

use crate::adapters::store::json_file::JsonFileStore;
use crate::adapters::store::memory::MemoryStore;
use crate::adapters::store::traits::SettingsStore;
use crate::config::schema::{AppConfig, StoreBackend};
use crate::domain::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Create a settings store based on the configuration
///
/// Examines `store.backend` and creates the matching implementation.
///
/// # Errors
///
/// Returns an error if the configured backend cannot be constructed.
pub fn create_store(config: &AppConfig) -> Result<Arc<dyn SettingsStore>> {
    match config.store.backend {
        StoreBackend::JsonFile => {
            tracing::debug!(path = %config.store.path, "Creating JSON file settings store");
            Ok(Arc::new(JsonFileStore::new(PathBuf::from(
                &config.store.path,
            ))))
        }
        StoreBackend::Memory => {
            tracing::debug!("Creating in-memory settings store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
