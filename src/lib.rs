// livechat-config - Scoped configuration manager for LiveChat settings
// Copyright (c) 2025 LiveChat Config Contributors
// Licensed under the MIT License

//! # livechat-config
//!
//! A scoped configuration manager for LiveChat administrative settings.
//! It validates a submitted settings batch, persists each field under a
//! hierarchical key in a backing configuration store, records an audit
//! entry describing who changed what and when, and invalidates the cache
//! category that depends on those settings.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The update pipeline (validation, orchestration, audit)
//! - [`adapters`] - External collaborators (settings store, cache,
//!   actor session)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Application configuration management
//! - [`logging`] - Structured diagnostic logging
//!
//! ## Update pipeline
//!
//! The side effects of an update are strictly ordered: validation, then
//! one write per settings field, then a single audit record, then cache
//! invalidation. A batch that fails validation changes nothing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use livechat_config::adapters::cache::FsCacheInvalidator;
//! use livechat_config::adapters::session::FixedActorResolver;
//! use livechat_config::adapters::store::JsonFileStore;
//! use livechat_config::core::{AuditLogger, ConfigurationService};
//! use livechat_config::domain::SettingsBatch;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = ConfigurationService::new(
//!         Arc::new(JsonFileStore::new(PathBuf::from("livechat-store.json"))),
//!         Arc::new(FsCacheInvalidator::new(PathBuf::from("livechat-cache"))),
//!         Arc::new(FixedActorResolver::new(Some("admin".to_string()))),
//!         AuditLogger::new(PathBuf::from("livechat-audit.log"), true, true)?,
//!     );
//!
//!     service
//!         .update_settings(SettingsBatch {
//!             license: Some("12345".to_string()),
//!             groups: Some("Support".to_string()),
//!             params: Some("param1".to_string()),
//!         })
//!         .await?;
//!
//!     println!("license = {}", service.license().await?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
