//! Audit logger for configuration changes
//!
//! Appends one serialized [`AuditRecord`] per configuration change to a
//! dedicated log file. The logger owns the record only for the duration of
//! the call; retrying an unreachable sink is out of scope here and left to
//! the caller's policy.

use crate::domain::audit::AuditRecord;
use crate::domain::{LiveChatError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Fixed descriptive prefix written with every record
const AUDIT_MESSAGE: &str = "LiveChat configuration saved";

/// Audit logger for configuration changes
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    ///
    /// Ensures the parent directory of the log file exists when the logger
    /// is enabled. A disabled logger never touches the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory cannot be created.
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        LiveChatError::Audit(format!(
                            "Failed to create audit log directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Whether this logger writes records at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append one record to the audit log
    ///
    /// Serialization of a well-formed record does not fail; the only error
    /// source is the log sink itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or written.
    pub fn log_data(&self, record: &AuditRecord) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                LiveChatError::Audit(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        let line = if self.json_format {
            let mut entry = serde_json::to_value(record)
                .map_err(|e| LiveChatError::Audit(format!("Failed to serialize record: {e}")))?;
            entry["message"] = serde_json::Value::String(AUDIT_MESSAGE.to_string());
            entry.to_string()
        } else {
            format!(
                "[{}] {} | actor: {} | license: {} | groups: {} | params: {}",
                record.timestamp,
                AUDIT_MESSAGE,
                record.actor.as_deref().unwrap_or("-"),
                record.license,
                record.groups,
                record.params
            )
        };

        writeln!(file, "{line}")
            .map_err(|e| LiveChatError::Audit(format!("Failed to write audit entry: {e}")))?;

        Ok(())
    }
}
