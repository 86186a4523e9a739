//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the application configuration file.

use crate::cli::commands::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use crate::config::schema::StoreBackend;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        match config.store.backend {
            StoreBackend::JsonFile => {
                println!("  Store Backend: json-file");
                println!("  Store Path: {}", config.store.path);
            }
            StoreBackend::Memory => {
                println!("  Store Backend: memory");
            }
        }
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path);
        } else {
            println!("  Audit Log: disabled");
        }
        println!("  Cache Dir: {}", config.cache.dir);

        Ok(EXIT_OK)
    }
}
