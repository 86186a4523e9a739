//! Integration tests for the settings update pipeline
//!
//! Exercises the ordering and side-effect guarantees of
//! `ConfigurationService::update_settings` against recording test doubles:
//! writes before audit, audit before invalidation, and nothing at all on a
//! rejected batch.

use async_trait::async_trait;
use livechat_config::adapters::cache::CacheInvalidator;
use livechat_config::adapters::session::FixedActorResolver;
use livechat_config::adapters::store::traits::SettingsStore;
use livechat_config::core::{AuditLogger, ConfigurationService};
use livechat_config::domain::settings::{
    ConfigScope, SettingsBatch, CONFIG_PATH_GENERAL_GROUPS, CONFIG_PATH_GENERAL_LICENSE,
    CONFIG_PATH_GENERAL_PARAMS,
};
use livechat_config::domain::{LiveChatError, Result, StoreError};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// One observed side effect of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Save {
        path: String,
        value: String,
        scope: String,
        scope_id: u32,
    },
    Invalidate {
        category: String,
        /// Whether the audit log already held a record when the
        /// invalidation happened
        audit_written: bool,
    },
}

/// Store double that records every write
struct RecordingStore {
    events: Arc<Mutex<Vec<Event>>>,
    /// Path whose write fails, for abort-mid-pipeline tests
    fail_on: Option<String>,
}

#[async_trait]
impl SettingsStore for RecordingStore {
    async fn get_flag(&self, _path: &str, _scope: ConfigScope) -> Result<bool> {
        Ok(true)
    }

    async fn get_value(&self, _path: &str, _scope: ConfigScope) -> Result<String> {
        Ok(String::new())
    }

    async fn save(
        &self,
        path: &str,
        value: &str,
        scope: ConfigScope,
        scope_id: u32,
    ) -> Result<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(StoreError::WriteFailed {
                path: path.to_string(),
                message: "simulated outage".to_string(),
            }
            .into());
        }

        self.events.lock().unwrap().push(Event::Save {
            path: path.to_string(),
            value: value.to_string(),
            scope: scope.as_str().to_string(),
            scope_id,
        });
        Ok(())
    }
}

/// Cache double that records invalidations and snapshots the audit file
struct RecordingCache {
    events: Arc<Mutex<Vec<Event>>>,
    audit_path: PathBuf,
}

#[async_trait]
impl CacheInvalidator for RecordingCache {
    async fn invalidate(&self, category: &str) -> Result<()> {
        let audit_written = std::fs::read_to_string(&self.audit_path)
            .map(|content| !content.trim().is_empty())
            .unwrap_or(false);

        self.events.lock().unwrap().push(Event::Invalidate {
            category: category.to_string(),
            audit_written,
        });
        Ok(())
    }
}

struct Fixture {
    service: ConfigurationService,
    events: Arc<Mutex<Vec<Event>>>,
    audit_path: PathBuf,
    _dir: TempDir,
}

fn fixture(actor: Option<&str>, fail_on: Option<&str>) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let audit_path = dir.path().join("livechat-audit.log");
    let events = Arc::new(Mutex::new(Vec::new()));

    let service = ConfigurationService::new(
        Arc::new(RecordingStore {
            events: events.clone(),
            fail_on: fail_on.map(str::to_string),
        }),
        Arc::new(RecordingCache {
            events: events.clone(),
            audit_path: audit_path.clone(),
        }),
        Arc::new(FixedActorResolver::new(actor.map(str::to_string))),
        AuditLogger::new(audit_path.clone(), true, true).unwrap(),
    );

    Fixture {
        service,
        events,
        audit_path,
        _dir: dir,
    }
}

fn full_batch() -> SettingsBatch {
    SettingsBatch {
        license: Some("12345".to_string()),
        groups: Some("Support".to_string()),
        params: Some("param1".to_string()),
    }
}

#[tokio::test]
async fn test_successful_update_side_effects_in_order() {
    let fx = fixture(Some("admin"), None);

    fx.service.update_settings(full_batch()).await.unwrap();

    let events = fx.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            Event::Save {
                path: CONFIG_PATH_GENERAL_LICENSE.to_string(),
                value: "12345".to_string(),
                scope: "default".to_string(),
                scope_id: 0,
            },
            Event::Save {
                path: CONFIG_PATH_GENERAL_GROUPS.to_string(),
                value: "Support".to_string(),
                scope: "default".to_string(),
                scope_id: 0,
            },
            Event::Save {
                path: CONFIG_PATH_GENERAL_PARAMS.to_string(),
                value: "param1".to_string(),
                scope: "default".to_string(),
                scope_id: 0,
            },
            Event::Invalidate {
                category: "config".to_string(),
                audit_written: true,
            },
        ]
    );
}

#[tokio::test]
async fn test_successful_update_audits_once() {
    let fx = fixture(Some("admin"), None);

    fx.service.update_settings(full_batch()).await.unwrap();

    let content = std::fs::read_to_string(&fx.audit_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["actor"], "admin");
    assert_eq!(record["license"], "12345");
    assert_eq!(record["groups"], "Support");
    assert_eq!(record["params"], "param1");
    assert!(!record["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_without_actor_audits_null_actor() {
    let fx = fixture(None, None);

    fx.service.update_settings(full_batch()).await.unwrap();

    let content = std::fs::read_to_string(&fx.audit_path).unwrap();
    let record: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert!(record["actor"].is_null());
}

#[tokio::test]
async fn test_empty_groups_defaults_to_zero_and_passes() {
    let fx = fixture(Some("admin"), None);

    fx.service
        .update_settings(SettingsBatch {
            license: Some("12345".to_string()),
            groups: Some(String::new()),
            params: Some("param1".to_string()),
        })
        .await
        .unwrap();

    let events = fx.events.lock().unwrap().clone();
    assert!(events.contains(&Event::Save {
        path: CONFIG_PATH_GENERAL_GROUPS.to_string(),
        value: "0".to_string(),
        scope: "default".to_string(),
        scope_id: 0,
    }));
}

#[tokio::test]
async fn test_blank_license_rejected_with_no_side_effects() {
    let fx = fixture(Some("admin"), None);

    let err = fx
        .service
        .update_settings(SettingsBatch {
            license: Some(String::new()),
            groups: Some("Support".to_string()),
            params: Some("param1".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Please Enter the Livechat License Number and try again."
    );
    assert!(fx.events.lock().unwrap().is_empty());
    assert!(!fx.audit_path.exists());
}

#[tokio::test]
async fn test_blank_params_rejected_with_no_side_effects() {
    let fx = fixture(Some("admin"), None);

    let err = fx
        .service
        .update_settings(SettingsBatch {
            license: Some("12345".to_string()),
            groups: Some("Support".to_string()),
            params: None,
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Please Enter the Livechat Params and try again."
    );
    assert!(fx.events.lock().unwrap().is_empty());
    assert!(!fx.audit_path.exists());
}

#[tokio::test]
async fn test_whitespace_groups_rejected_before_params() {
    let fx = fixture(Some("admin"), None);

    let err = fx
        .service
        .update_settings(SettingsBatch {
            license: Some("12345".to_string()),
            groups: Some("   ".to_string()),
            params: None,
        })
        .await
        .unwrap_err();

    // Fields are checked license -> groups -> params; groups fails first
    assert_eq!(
        err.to_string(),
        "Please Enter the Livechat Groups and try again."
    );
    assert!(fx.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_write_failure_aborts_without_audit_or_invalidate() {
    let fx = fixture(Some("admin"), Some(CONFIG_PATH_GENERAL_GROUPS));

    let err = fx.service.update_settings(full_batch()).await.unwrap_err();
    assert!(matches!(err, LiveChatError::Store(_)));

    // The license write happened before the failure and stays committed
    let events = fx.events.lock().unwrap().clone();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], Event::Save { path, .. }
        if path == CONFIG_PATH_GENERAL_LICENSE));

    // Nothing downstream of the failed write ran
    assert!(!fx.audit_path.exists());
}

#[tokio::test]
async fn test_unreachable_audit_sink_does_not_abort_update() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the log path makes every append fail
    let audit_path = dir.path().join("livechat-audit.log");
    std::fs::create_dir_all(&audit_path).unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let service = ConfigurationService::new(
        Arc::new(RecordingStore {
            events: events.clone(),
            fail_on: None,
        }),
        Arc::new(RecordingCache {
            events: events.clone(),
            audit_path: audit_path.clone(),
        }),
        Arc::new(FixedActorResolver::new(Some("admin".to_string()))),
        AuditLogger::new(audit_path, true, true).unwrap(),
    );

    service.update_settings(full_batch()).await.unwrap();

    // Writes and invalidation still happened, the audit line was dropped
    let events = events.lock().unwrap().clone();
    assert_eq!(events.len(), 4);
    assert!(matches!(
        events.last().unwrap(),
        Event::Invalidate { category, audit_written: false } if category == "config"
    ));
}
