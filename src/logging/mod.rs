//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels
//! - Optional JSON file logging with rotation
//!
//! Progress lines meant for the user go to stdout through the
//! [`ConsoleObserver`](crate::core::ConsoleObserver). The tracing events that
//! mirror those lines are emitted at `debug`, so at the default `info` level
//! each progress or failure line appears exactly once.
//!
//! # Example
//!
//! ```no_run
//! use export_runner::logging::init_logging;
//! use export_runner::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{console_filter, init_logging, LoggingGuard};

/// Log the start of a single model export
///
/// # Example
///
/// ```no_run
/// use export_runner::log_export_start;
/// use export_runner::domain::ModelId;
///
/// let model = ModelId::new("ViT-B-32__openai").unwrap();
/// log_export_start!(&model);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($model:expr) => {
        tracing::debug!(model = %$model, "Exporting model");
    };
}

/// Log a failed model export
///
/// # Example
///
/// ```no_run
/// use export_runner::log_export_failure;
/// use export_runner::core::ExportFailure;
/// use export_runner::domain::ModelId;
///
/// let failure = ExportFailure::new(ModelId::new("RN50__openai").unwrap(), "exit status 1");
/// log_export_failure!(&failure);
/// ```
#[macro_export]
macro_rules! log_export_failure {
    ($failure:expr) => {
        tracing::debug!(
            model = %$failure.model,
            detail = %$failure.detail,
            "Failed to export model"
        );
    };
}

/// Log loop progress through the active list
///
/// # Example
///
/// ```no_run
/// use export_runner::log_run_progress;
///
/// log_run_progress!(2, 5);
/// ```
#[macro_export]
macro_rules! log_run_progress {
    ($current:expr, $total:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            progress_pct = ($current as f64 / $total as f64 * 100.0),
            "Processing model"
        );
    };
}
