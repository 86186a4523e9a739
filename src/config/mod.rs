//! Configuration management
//!
//! This module provides TOML-based application configuration loading,
//! parsing, and validation.
//!
//! # Overview
//!
//! The application config file (`livechat.toml`) selects the settings
//! store backend and locates the audit log and the cache directory.
//! Loading supports `${VAR}` environment substitution and `LIVECHAT_*`
//! environment overrides.

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{AppConfig, AuditConfig, CacheConfig, LoggingConfig, StoreBackend, StoreConfig};
