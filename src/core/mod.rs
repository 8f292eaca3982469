//! Core run logic.
//!
//! # Modules
//!
//! - [`driver`] - the sequential export loop
//! - [`observer`] - progress and failure reporting
//! - [`outcome`] - per-invocation outcomes and the run report
//!
//! # Example
//!
//! ```rust,no_run
//! use export_runner::adapters::exporter::ProcessExporter;
//! use export_runner::config::load_builtin_config;
//! use export_runner::core::{ConsoleObserver, ExportDriver};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_builtin_config()?;
//! let driver = ExportDriver::new(
//!     Arc::new(ProcessExporter::new(config.exporter.clone())),
//!     Arc::new(ConsoleObserver::stdout()),
//! );
//! let report = driver.run(&config.models).await;
//! println!("Attempted: {}", report.attempted());
//! # Ok(())
//! # }
//! ```

pub mod driver;
pub mod observer;
pub mod outcome;

pub use driver::ExportDriver;
pub use observer::{ConsoleObserver, RunObserver};
pub use outcome::{ExportFailure, InvocationOutcome, RunReport};
