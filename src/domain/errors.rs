//! Domain error types
//!
//! This module defines the error hierarchy for the configuration manager.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type for LiveChat configuration management
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum LiveChatError {
    /// Validation errors (recoverable, user-facing message)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Settings store errors
    #[error("Settings store error: {0}")]
    Store(#[from] StoreError),

    /// Audit log sink errors
    #[error("Audit log error: {0}")]
    Audit(String),

    /// Configuration-related errors (application config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cache invalidation errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Validation errors raised by the settings validator
///
/// The display text is shown verbatim to the administrator submitting the
/// change, so it names the first offending field by its form label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was blank after trimming
    #[error("Please Enter the {0} and try again.")]
    EmptyField(String),
}

impl ValidationError {
    /// The form label of the field that failed validation
    pub fn field_label(&self) -> &str {
        match self {
            ValidationError::EmptyField(label) => label,
        }
    }
}

/// Settings-store-specific errors
///
/// Errors that occur when reading from or writing to the backing
/// configuration store. These errors don't expose the store's internals.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read a settings value
    #[error("Failed to read settings key '{path}': {message}")]
    ReadFailed { path: String, message: String },

    /// Failed to write a settings value
    #[error("Failed to write settings key '{path}': {message}")]
    WriteFailed { path: String, message: String },

    /// The store's backing medium is corrupt or unreadable
    #[error("Settings store is unavailable: {0}")]
    Unavailable(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for LiveChatError {
    fn from(err: std::io::Error) -> Self {
        LiveChatError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LiveChatError {
    fn from(err: serde_json::Error) -> Self {
        LiveChatError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LiveChatError {
    fn from(err: toml::de::Error) -> Self {
        LiveChatError::Configuration(format!("TOML parse error: {err}"))
    }
}
