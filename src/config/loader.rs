//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RunnerConfig;
use crate::domain::errors::RunnerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Built-in model catalog and exporter command, used when no file is given
pub const BUILTIN_CONFIG: &str = include_str!("../../assets/default-config.toml");

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RunnerConfig
/// 4. Applies environment variable overrides (EXPORT_RUNNER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is missing, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use export_runner::config::loader::load_config;
///
/// let config = load_config("export-runner.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RunnerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RunnerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RunnerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    tracing::debug!(path = %path.display(), "Loaded configuration file");
    load_config_str(&contents)
}

/// Loads the embedded catalog, still honouring environment overrides
pub fn load_builtin_config() -> Result<RunnerConfig> {
    tracing::debug!("Using built-in model catalog");
    load_config_str(BUILTIN_CONFIG)
}

/// Loads from a file when a path is given, otherwise from the embedded catalog
pub fn load_config_or_builtin(path: Option<&str>) -> Result<RunnerConfig> {
    match path {
        Some(p) => load_config(p),
        None => load_builtin_config(),
    }
}

/// Parses, overrides and validates configuration from TOML text
pub fn load_config_str(contents: &str) -> Result<RunnerConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: RunnerConfig = toml::from_str(&contents)
        .map_err(|e| RunnerError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        RunnerError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| RunnerError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(RunnerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using the EXPORT_RUNNER_* prefix
///
/// Variables follow the pattern EXPORT_RUNNER_<SECTION>_<KEY>, for example
/// EXPORT_RUNNER_EXPORTER_MODE.
///
/// # Errors
///
/// Returns an error if a boolean override is not `true` or `false`
fn apply_env_overrides(config: &mut RunnerConfig) -> Result<()> {
    if let Ok(val) = std::env::var("EXPORT_RUNNER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("EXPORT_RUNNER_EXPORTER_PROGRAM") {
        config.exporter.program = val;
    }
    if let Ok(val) = std::env::var("EXPORT_RUNNER_EXPORTER_MODE") {
        config.exporter.mode = val;
    }
    if let Ok(val) = std::env::var("EXPORT_RUNNER_EXPORTER_WORKING_DIR") {
        config.exporter.working_dir = Some(val);
    }

    if let Ok(val) = std::env::var("EXPORT_RUNNER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled =
            parse_bool_override("EXPORT_RUNNER_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("EXPORT_RUNNER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_bool_override(name: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        RunnerError::Configuration(format!(
            "Invalid value '{}' for {}. Must be one of: true, false",
            value, name
        ))
    })
}
