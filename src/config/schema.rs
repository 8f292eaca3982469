//! Configuration schema types
//!
//! This module defines the configuration structure that maps onto the TOML file.

use crate::domain::ModelList;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root runner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// External exporter command
    #[serde(default)]
    pub exporter: ExporterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Model catalog, processed in order
    #[serde(default)]
    pub models: ModelList,
}

impl RunnerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.exporter.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// External exporter command
///
/// Each invocation runs `program args... <model-id> <mode>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Executable to launch
    #[serde(default = "default_program")]
    pub program: String,

    /// Leading arguments placed before the model identifier
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Mode string appended after the model identifier, fixed for the run
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Working directory for the exporter process
    #[serde(default)]
    pub working_dir: Option<String>,

    /// Extra environment variables for the exporter process
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            mode: default_mode(),
            working_dir: None,
            env: BTreeMap::new(),
        }
    }
}

impl ExporterConfig {
    fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("exporter.program cannot be empty".to_string());
        }
        if self.mode.trim().is_empty() {
            return Err("exporter.mode cannot be empty".to_string());
        }
        if let Some(dir) = &self.working_dir {
            if dir.trim().is_empty() {
                return Err("exporter.working_dir cannot be empty when set".to_string());
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_program() -> String {
    "python".to_string()
}

fn default_args() -> Vec<String> {
    vec!["export.py".to_string()]
}

fn default_mode() -> String {
    "openclip".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
