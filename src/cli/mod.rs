//! CLI interface and argument parsing
//!
//! This module provides the administrative command-line interface using
//! clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// LiveChat configuration manager
#[derive(Parser, Debug)]
#[command(name = "livechat-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to application configuration file
    #[arg(short, long, default_value = "livechat.toml", env = "LIVECHAT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LIVECHAT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current live chat configuration
    Show(commands::show::ShowArgs),

    /// Update the live chat configuration
    Update(commands::update::UpdateArgs),

    /// Validate the application configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new application configuration file
    Init(commands::init::InitArgs),
}
