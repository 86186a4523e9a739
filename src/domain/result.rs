//! Result type alias
//!
//! This module provides a convenient Result type alias that uses
//! `LiveChatError` as the error type.

use super::errors::LiveChatError;

/// Result type alias for configuration operations
///
/// This is a convenience type alias that uses `LiveChatError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use livechat_config::domain::result::Result;
/// use livechat_config::domain::errors::LiveChatError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LiveChatError::Configuration("invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LiveChatError>;
