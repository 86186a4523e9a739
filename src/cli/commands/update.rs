//! Update command implementation
//!
//! The propagation boundary for the update pipeline: validation failures
//! are shown with their specific message, anything else is logged and
//! reported generically. The command always returns control with a
//! report, never a panic.

use crate::cli::commands::{
    build_service, EXIT_CONFIG, EXIT_FATAL, EXIT_OK, EXIT_UNAVAILABLE, EXIT_VALIDATION,
};
use crate::config::load_config;
use crate::domain::{LiveChatError, SettingsBatch};
use clap::Args;

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// License number for the live chat service
    #[arg(long)]
    pub license: Option<String>,

    /// Agent groups to configure
    #[arg(long)]
    pub groups: Option<String>,

    /// Additional live chat parameters
    #[arg(long)]
    pub params: Option<String>,

    /// Username recorded in the audit log (defaults to the OS user)
    #[arg(long, env = "LIVECHAT_ACTOR")]
    pub actor: Option<String>,
}

impl UpdateArgs {
    /// Execute the update command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let service = match build_service(&config, self.actor.clone()) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to wire configuration service");
                println!("❌ Something went wrong. Please try again.");
                return Ok(EXIT_FATAL);
            }
        };

        match service.is_enabled().await {
            Ok(true) => {}
            Ok(false) => {
                println!("❌ Live Chat administration is not available.");
                return Ok(EXIT_UNAVAILABLE);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read enabled flag");
                println!("❌ Something went wrong. Please try again.");
                return Ok(EXIT_FATAL);
            }
        }

        let batch = SettingsBatch {
            license: self.license.clone(),
            groups: self.groups.clone(),
            params: self.params.clone(),
        };

        match service.update_settings(batch).await {
            Ok(()) => {
                println!("✅ Live Chat Configurations have been updated");
                Ok(EXIT_OK)
            }
            Err(LiveChatError::Validation(e)) => {
                println!("❌ {e}");
                Ok(EXIT_VALIDATION)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error executing save live chat settings");
                println!("❌ Something went wrong. Please try again.");
                Ok(EXIT_FATAL)
            }
        }
    }
}
