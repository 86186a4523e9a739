//! Settings keys, scopes, and the submitted batch types
//!
//! The set of managed settings is fixed and known at compile time: an
//! enabled flag (read-only to this crate) and three string-valued fields
//! written by the administrative update pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchical key of the enabled flag
pub const CONFIG_PATH_GENERAL_ENABLED: &str = "livechat/general/enabled";

/// Hierarchical key of the license number setting
pub const CONFIG_PATH_GENERAL_LICENSE: &str = "livechat/general/license";

/// Hierarchical key of the groups setting
pub const CONFIG_PATH_GENERAL_GROUPS: &str = "livechat/general/groups";

/// Hierarchical key of the advanced parameters setting
pub const CONFIG_PATH_GENERAL_PARAMS: &str = "livechat/general/params";

/// Scope id used for all administrative writes
pub const DEFAULT_SCOPE_ID: u32 = 0;

/// Cache category recomputed after a configuration change
pub const CACHE_CATEGORY_CONFIG: &str = "config";

/// Form label of the license field, used in validation messages
pub const FIELD_LABEL_LICENSE: &str = "Livechat License Number";

/// Form label of the groups field, used in validation messages
pub const FIELD_LABEL_GROUPS: &str = "Livechat Groups";

/// Form label of the params field, used in validation messages
pub const FIELD_LABEL_PARAMS: &str = "Livechat Params";

/// Scope under which a setting value is read or written
///
/// Administrative writes go to the `Default` scope; the runtime reads the
/// `Store` view, which the backing store resolves with a fallback to
/// `Default` for values never overridden at store level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigScope {
    /// Store-wide default scope, target of administrative writes
    Default,
    /// Store view, source of runtime reads
    Store,
}

impl ConfigScope {
    /// Scope code as persisted by the backing store
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigScope::Default => "default",
            ConfigScope::Store => "store",
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A settings batch as submitted by a caller
///
/// All fields are optional; [`SettingsBatch::normalize`] applies the
/// documented defaults before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsBatch {
    /// License number for the live chat service
    pub license: Option<String>,
    /// Agent groups to configure in the live chat
    pub groups: Option<String>,
    /// Additional live chat parameters
    pub params: Option<String>,
}

impl SettingsBatch {
    /// Normalize the batch into the triple the pipeline persists
    ///
    /// Absent license or params become the empty string. An absent or
    /// exactly-empty groups value becomes the literal string `"0"`; a
    /// whitespace-only groups value is kept as-is and left for the
    /// validator to reject.
    pub fn normalize(self) -> SettingsUpdate {
        let groups = match self.groups {
            Some(groups) if !groups.is_empty() => groups,
            _ => "0".to_string(),
        };

        SettingsUpdate {
            license: self.license.unwrap_or_default(),
            groups,
            params: self.params.unwrap_or_default(),
        }
    }
}

/// The normalized settings triple: validator input and persistence payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsUpdate {
    /// License number, written to [`CONFIG_PATH_GENERAL_LICENSE`]
    pub license: String,
    /// Groups, written to [`CONFIG_PATH_GENERAL_GROUPS`]
    pub groups: String,
    /// Parameters, written to [`CONFIG_PATH_GENERAL_PARAMS`]
    pub params: String,
}
