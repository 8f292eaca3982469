//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Export Runner - invoke a model exporter for every catalog entry
#[derive(Parser, Debug)]
#[command(name = "export-runner")]
#[command(version, about, long_about = None)]
#[command(author = "Export Runner Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in catalog when omitted)
    #[arg(short, long, env = "EXPORT_RUNNER_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "EXPORT_RUNNER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every enabled model, one at a time
    Run(commands::run::RunArgs),

    /// Show the model catalog
    List(commands::list::ListArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write the built-in configuration to a file
    Init(commands::init::InitArgs),
}
