//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! application configuration file.

use crate::cli::commands::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "livechat.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing livechat-config");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: livechat-config validate-config");
                println!("  3. Show the current values: livechat-config show");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Starter configuration content
    fn starter_config() -> &'static str {
        r#"# livechat-config application configuration

[application]
log_level = "info"

[store]
# Settings store backend: json-file | memory
backend = "json-file"
path = "livechat-store.json"

[audit]
enabled = true
log_path = "livechat-audit.log"
json_format = true

[cache]
dir = "livechat-cache"

[logging]
local_enabled = false
local_path = "logs"
"#
    }
}
