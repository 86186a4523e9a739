//! CLI command implementations
//!
//! Each command parses its own arguments and returns a process exit code:
//! 0 success, 1 validation failure, 2 configuration error, 4 feature
//! unavailable, 5 fatal error.

pub mod init;
pub mod show;
pub mod update;
pub mod validate;

use crate::adapters::cache::FsCacheInvalidator;
use crate::adapters::session::{ActorResolver, EnvActorResolver, FixedActorResolver};
use crate::adapters::store::create_store;
use crate::config::AppConfig;
use crate::core::{AuditLogger, ConfigurationService};
use crate::domain::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Exit code for a successful command
pub const EXIT_OK: i32 = 0;
/// Exit code for a rejected settings batch
pub const EXIT_VALIDATION: i32 = 1;
/// Exit code for application configuration problems
pub const EXIT_CONFIG: i32 = 2;
/// Exit code when live chat administration is not available
pub const EXIT_UNAVAILABLE: i32 = 4;
/// Exit code for any other failure
pub const EXIT_FATAL: i32 = 5;

/// Wire a configuration service from the application config
///
/// An explicitly given actor takes precedence; otherwise the acting OS
/// user is recorded.
pub fn build_service(config: &AppConfig, actor: Option<String>) -> Result<ConfigurationService> {
    let store = create_store(config)?;
    let cache = Arc::new(FsCacheInvalidator::new(PathBuf::from(&config.cache.dir)));
    let session: Arc<dyn ActorResolver> = match actor {
        Some(actor) => Arc::new(FixedActorResolver::new(Some(actor))),
        None => Arc::new(EnvActorResolver::new("USER")),
    };
    let audit = AuditLogger::new(
        PathBuf::from(&config.audit.log_path),
        config.audit.json_format,
        config.audit.enabled,
    )?;

    Ok(ConfigurationService::new(store, cache, session, audit))
}
