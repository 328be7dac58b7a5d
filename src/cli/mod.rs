//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for namescrub using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// namescrub - remove person names and web artifacts from text
#[derive(Parser, Debug)]
#[command(name = "namescrub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "namescrub.toml", env = "NAMESCRUB_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "NAMESCRUB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scrub artifacts and redact person names
    Redact(commands::redact::RedactArgs),

    /// Remove URLs, e-mail addresses, images and markup only
    Scrub(commands::scrub::ScrubArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
