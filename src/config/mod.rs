//! Configuration management for the export runner.
//!
//! Configuration is a TOML document with three optional sections and the
//! model catalog:
//!
//! - [`ApplicationConfig`] - log level
//! - [`ExporterConfig`] - the external exporter command and its fixed mode
//! - [`LoggingConfig`] - optional JSON file logging
//! - `[[models]]` - ordered catalog entries, each with an `enabled` toggle
//!
//! When no file is supplied the embedded catalog ([`loader::BUILTIN_CONFIG`])
//! is used.
//!
//! # Example Configuration
//!
//! ```toml
//! [exporter]
//! program = "python"
//! args = ["export.py"]
//! mode = "openclip"
//! working_dir = "${EXPORT_DIR}"
//!
//! [[models]]
//! id = "ViT-SO400M-14-SigLIP2__webli"
//!
//! [[models]]
//! id = "ViT-B-32__openai"
//! enabled = false
//! ```
//!
//! `${VAR_NAME}` placeholders are replaced from the environment, and
//! `EXPORT_RUNNER_<SECTION>_<KEY>` variables override individual settings.
//!
//! ```rust,no_run
//! use export_runner::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("export-runner.toml")?;
//! println!("Exporter mode: {}", config.exporter.mode);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_builtin_config, load_config, load_config_or_builtin, load_config_str};
pub use schema::{ApplicationConfig, ExporterConfig, LoggingConfig, RunnerConfig};
