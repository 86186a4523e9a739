//! Configuration service - orchestrator for the update pipeline
//!
//! This module coordinates the administrative update workflow across the
//! settings store, the audit logger, and the cache invalidator. The side
//! effects of [`ConfigurationService::update_settings`] are strictly
//! ordered: field writes, then the audit record, then cache invalidation.
//! An auditor must never record a change that was not durably written, and
//! a cache must never be invalidated before the new value is available to
//! be re-read on the next cache fill.

use crate::adapters::cache::CacheInvalidator;
use crate::adapters::session::ActorResolver;
use crate::adapters::store::traits::SettingsStore;
use crate::core::audit::AuditLogger;
use crate::core::validator;
use crate::domain::audit::AuditRecord;
use crate::domain::settings::{
    ConfigScope, SettingsBatch, CACHE_CATEGORY_CONFIG, CONFIG_PATH_GENERAL_ENABLED,
    CONFIG_PATH_GENERAL_GROUPS, CONFIG_PATH_GENERAL_LICENSE, CONFIG_PATH_GENERAL_PARAMS,
    DEFAULT_SCOPE_ID,
};
use crate::domain::Result;
use std::sync::Arc;

/// Configuration service
///
/// Holds its collaborators as narrow capability interfaces injected at
/// construction. The service keeps no state of its own; every call goes
/// through the settings store.
pub struct ConfigurationService {
    store: Arc<dyn SettingsStore>,
    cache: Arc<dyn CacheInvalidator>,
    session: Arc<dyn ActorResolver>,
    audit: AuditLogger,
}

impl ConfigurationService {
    /// Create a new configuration service
    pub fn new(
        store: Arc<dyn SettingsStore>,
        cache: Arc<dyn CacheInvalidator>,
        session: Arc<dyn ActorResolver>,
        audit: AuditLogger,
    ) -> Self {
        Self {
            store,
            cache,
            session,
            audit,
        }
    }

    /// Whether live chat is enabled for the store view
    ///
    /// Read-only; the flag itself is managed outside this crate.
    pub async fn is_enabled(&self) -> Result<bool> {
        self.store
            .get_flag(CONFIG_PATH_GENERAL_ENABLED, ConfigScope::Store)
            .await
    }

    /// Current license number under the store view
    pub async fn license(&self) -> Result<String> {
        self.store
            .get_value(CONFIG_PATH_GENERAL_LICENSE, ConfigScope::Store)
            .await
    }

    /// Current groups value under the store view
    pub async fn groups(&self) -> Result<String> {
        self.store
            .get_value(CONFIG_PATH_GENERAL_GROUPS, ConfigScope::Store)
            .await
    }

    /// Current advanced parameters under the store view
    pub async fn params(&self) -> Result<String> {
        self.store
            .get_value(CONFIG_PATH_GENERAL_PARAMS, ConfigScope::Store)
            .await
    }

    /// Apply a settings batch
    ///
    /// Normalizes the batch, validates it, writes the three fields under
    /// the default scope, appends one audit record, and invalidates the
    /// configuration cache category - in that order.
    ///
    /// On validation failure nothing is written, logged, or invalidated.
    /// After validation passes there is no rollback: a failed write leaves
    /// earlier writes committed and surfaces the error to the caller. An
    /// unreachable audit sink does not abort the update; the miss is
    /// reported at WARN and the pipeline continues.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ValidationError`] (wrapped) for blank
    /// fields, or the store/cache error that interrupted the pipeline.
    pub async fn update_settings(&self, batch: SettingsBatch) -> Result<()> {
        let update = batch.normalize();
        validator::validate(&update)?;

        self.save(CONFIG_PATH_GENERAL_LICENSE, &update.license)
            .await?;
        self.save(CONFIG_PATH_GENERAL_GROUPS, &update.groups).await?;
        self.save(CONFIG_PATH_GENERAL_PARAMS, &update.params).await?;

        let record = AuditRecord::new(self.session.current_actor(), &update);
        if let Err(e) = self.audit.log_data(&record) {
            tracing::warn!(error = %e, "Audit sink unavailable, change was saved but not audited");
        }

        self.cache.invalidate(CACHE_CATEGORY_CONFIG).await?;

        tracing::info!(
            actor = record.actor.as_deref().unwrap_or("-"),
            "Live chat configuration updated"
        );
        Ok(())
    }

    async fn save(&self, path: &str, value: &str) -> Result<()> {
        self.store
            .save(path, value, ConfigScope::Default, DEFAULT_SCOPE_ID)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::FixedActorResolver;
    use crate::adapters::store::memory::MemoryStore;
    use crate::domain::LiveChatError;
    use async_trait::async_trait;
    use tempfile::tempdir;

    struct NoopCache;

    #[async_trait]
    impl CacheInvalidator for NoopCache {
        async fn invalidate(&self, _category: &str) -> Result<()> {
            Ok(())
        }
    }

    fn service_with(store: Arc<MemoryStore>) -> ConfigurationService {
        let dir = tempdir().unwrap();
        let audit =
            AuditLogger::new(dir.path().join("livechat-audit.log"), true, false).unwrap();
        ConfigurationService::new(
            store,
            Arc::new(NoopCache),
            Arc::new(FixedActorResolver::new(Some("admin".to_string()))),
            audit,
        )
    }

    #[tokio::test]
    async fn test_is_enabled_mirrors_flag() {
        let store = Arc::new(MemoryStore::new());
        store
            .save(
                CONFIG_PATH_GENERAL_ENABLED,
                "1",
                ConfigScope::Store,
                DEFAULT_SCOPE_ID,
            )
            .await
            .unwrap();

        let service = service_with(store);
        assert!(service.is_enabled().await.unwrap());
    }

    #[tokio::test]
    async fn test_is_enabled_defaults_false() {
        let service = service_with(Arc::new(MemoryStore::new()));
        assert!(!service.is_enabled().await.unwrap());
    }

    #[tokio::test]
    async fn test_accessors_read_back_written_values() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store);

        service
            .update_settings(SettingsBatch {
                license: Some("12345".to_string()),
                groups: Some("Support".to_string()),
                params: Some("param1".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(service.license().await.unwrap(), "12345");
        assert_eq!(service.groups().await.unwrap(), "Support");
        assert_eq!(service.params().await.unwrap(), "param1");
    }

    #[tokio::test]
    async fn test_validation_failure_writes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());

        let err = service
            .update_settings(SettingsBatch {
                license: Some(String::new()),
                groups: Some("Support".to_string()),
                params: Some("param1".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LiveChatError::Validation(_)));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_empty_groups_written_as_zero() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store);

        service
            .update_settings(SettingsBatch {
                license: Some("12345".to_string()),
                groups: Some(String::new()),
                params: Some("param1".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(service.groups().await.unwrap(), "0");
    }
}
