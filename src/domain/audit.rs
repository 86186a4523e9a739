//! Audit record type
//!
//! An [`AuditRecord`] captures who changed the configuration values and
//! when. One record is built per successful update and handed to the audit
//! logger; no reference is retained afterward.

use crate::domain::settings::SettingsUpdate;
use chrono::Local;
use serde::Serialize;

/// Timestamp format used in audit records
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An immutable log entry describing one configuration change
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    /// Username of the acting administrator, if one was resolved
    pub actor: Option<String>,
    /// Local wall-clock time of the change, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Persisted license value
    pub license: String,
    /// Persisted groups value
    pub groups: String,
    /// Persisted params value
    pub params: String,
}

impl AuditRecord {
    /// Build a record for the given update, stamped with the current time
    pub fn new(actor: Option<String>, update: &SettingsUpdate) -> Self {
        Self {
            actor,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            license: update.license.clone(),
            groups: update.groups.clone(),
            params: update.params.clone(),
        }
    }
}
