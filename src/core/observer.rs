//! Run observers
//!
//! The driver announces each attempt and each failure through a
//! [`RunObserver`]. The console observer produces the user-facing lines:
//!
//! ```text
//! Exporting model ViT-B-32__openai
//! Failed to export model ViT-B-32__openai: <detail>
//! ```

use crate::core::outcome::ExportFailure;
use crate::domain::ModelId;
use crate::{log_export_failure, log_export_start};
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Receives progress and failure events from the driver
pub trait RunObserver: Send + Sync {
    /// Called before the exporter is invoked for `model`
    fn on_start(&self, model: &ModelId);

    /// Called after an invocation fails
    fn on_failure(&self, failure: &ExportFailure);
}

/// Writes one line per event, stdout unless another writer is given
pub struct ConsoleObserver {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleObserver {
    /// Observer writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Observer writing to `writer`
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn write_line(&self, line: fmt::Arguments<'_>) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = out.write_fmt(format_args!("{line}\n")).and_then(|_| out.flush()) {
            tracing::debug!(error = %e, "Failed to write progress line");
        }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for ConsoleObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleObserver").finish_non_exhaustive()
    }
}

impl RunObserver for ConsoleObserver {
    fn on_start(&self, model: &ModelId) {
        log_export_start!(model);
        self.write_line(format_args!("Exporting model {model}"));
    }

    fn on_failure(&self, failure: &ExportFailure) {
        log_export_failure!(failure);
        self.write_line(format_args!("{failure}"));
    }
}
