//! Domain models and types
//!
//! This module contains the core domain types and business rules for the
//! configuration manager.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Settings types** ([`SettingsBatch`], [`SettingsUpdate`], [`ConfigScope`])
//! - **Audit record** ([`AuditRecord`])
//! - **Error types** ([`LiveChatError`], [`ValidationError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```
//! use livechat_config::domain::{LiveChatError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(LiveChatError::Configuration("missing file".to_string()))
//! }
//! ```

pub mod audit;
pub mod errors;
pub mod result;
pub mod settings;

// Re-export commonly used types for convenience
pub use audit::AuditRecord;
pub use errors::{LiveChatError, StoreError, ValidationError};
pub use result::Result;
pub use settings::{ConfigScope, SettingsBatch, SettingsUpdate};
