//! Application configuration schema types
//!
//! This module defines the configuration structure mapped from the TOML
//! application config file.

use crate::domain::{LiveChatError, Result};
use serde::{Deserialize, Serialize};

/// Settings store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreBackend {
    /// JSON file on local disk
    JsonFile,
    /// Process-local map (development and tests)
    Memory,
}

/// Main application configuration
///
/// This is the root structure that maps to the TOML file. Every section
/// has usable defaults so a minimal file is enough to get started.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Settings store backend
    #[serde(default)]
    pub store: StoreConfig,

    /// Audit log sink
    #[serde(default)]
    pub audit: AuditConfig,

    /// Cache directory layout
    #[serde(default)]
    pub cache: CacheConfig,

    /// Diagnostic logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        crate::config::loader::load_config(path)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.application.log_level.to_lowercase().as_str()) {
            return Err(LiveChatError::Configuration(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                self.application.log_level
            )));
        }

        if self.store.backend == StoreBackend::JsonFile && self.store.path.trim().is_empty() {
            return Err(LiveChatError::Configuration(
                "store.path is required for the json-file backend".to_string(),
            ));
        }

        if self.audit.enabled && self.audit.log_path.trim().is_empty() {
            return Err(LiveChatError::Configuration(
                "audit.log_path is required when audit is enabled".to_string(),
            ));
        }

        if self.cache.dir.trim().is_empty() {
            return Err(LiveChatError::Configuration(
                "cache.dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Settings store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend implementation (json-file or memory)
    #[serde(default = "default_store_backend")]
    pub backend: StoreBackend,

    /// Path of the backing file for the json-file backend
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            path: default_store_path(),
        }
    }
}

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Whether changes are audited at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Path of the audit log file
    #[serde(default = "default_audit_log_path")]
    pub log_path: String,

    /// Write JSON lines instead of plain text
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

/// Cache directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Root directory whose subdirectories are cache categories
    #[serde(default = "default_cache_dir")]
    pub dir: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
        }
    }
}

/// Diagnostic logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for rotated log files
    #[serde(default = "default_logging_path")]
    pub local_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_logging_path(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_store_backend() -> StoreBackend {
    StoreBackend::JsonFile
}

fn default_store_path() -> String {
    "livechat-store.json".to_string()
}

fn default_audit_log_path() -> String {
    "livechat-audit.log".to_string()
}

fn default_cache_dir() -> String {
    "livechat-cache".to_string()
}

fn default_logging_path() -> String {
    "logs".to_string()
}

fn default_true() -> bool {
    true
}
