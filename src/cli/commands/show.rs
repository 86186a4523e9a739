//! Show command implementation
//!
//! Displays the live chat configuration as the runtime sees it. Access is
//! gated on the enabled flag the same way the administrative screen is.

use crate::cli::commands::{build_service, EXIT_CONFIG, EXIT_FATAL, EXIT_OK, EXIT_UNAVAILABLE};
use crate::config::load_config;
use clap::Args;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let service = match build_service(&config, None) {
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

        let (license, groups, params) = match (
            service.license().await,
            service.groups().await,
            service.params().await,
        ) {
            (Ok(license), Ok(groups), Ok(params)) => (license, groups, params),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                tracing::error!(error = %e, "Failed to read live chat settings");
                println!("❌ Something went wrong. Please try again.");
                return Ok(EXIT_FATAL);
            }
        };

        println!("💬 Live Chat Configuration");
        println!();
        println!("  License Number: {}", display_or_unset(&license));
        println!("  Groups:         {}", display_or_unset(&groups));
        println!("  Params:         {}", display_or_unset(&params));

        Ok(EXIT_OK)
    }
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}
