// Export Runner - sequential driver for an external model exporter
// Copyright (c) 2025 Export Runner Contributors
// Licensed under the MIT License

//! # Export Runner
//!
//! Export Runner walks an ordered catalog of model identifiers and invokes an
//! external exporter once per enabled entry, waiting for each invocation to
//! finish before starting the next. A failed invocation is reported and the
//! run carries on.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The export driver, run observers and invocation outcomes
//! - [`adapters`] - The external exporter boundary (subprocess, dry run)
//! - [`domain`] - Model identifiers, the catalog, and error types
//! - [`config`] - Configuration management and the built-in catalog
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use export_runner::adapters::exporter::ProcessExporter;
//! use export_runner::config::load_config;
//! use export_runner::core::{ConsoleObserver, ExportDriver};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("export-runner.toml")?;
//!
//!     let driver = ExportDriver::new(
//!         Arc::new(ProcessExporter::new(config.exporter.clone())),
//!         Arc::new(ConsoleObserver::stdout()),
//!     );
//!
//!     // Prints "Exporting model <id>" per entry and a failure line when one fails
//!     driver.run(&config.models).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Loading and validation fail with [`domain::RunnerError`]. Exporter failures
//! are values ([`core::InvocationOutcome::Failed`]) and never abort a run.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
