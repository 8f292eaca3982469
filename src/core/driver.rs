//! Export driver
//!
//! Walks the active catalog entries in order and invokes the exporter once
//! per entry, one at a time. A failed invocation is reported and the loop
//! moves on; nothing is retried and nothing aborts the run.

use crate::adapters::exporter::Exporter;
use crate::core::observer::RunObserver;
use crate::core::outcome::{InvocationOutcome, RunReport};
use crate::domain::ModelList;
use crate::log_run_progress;
use std::sync::Arc;
use std::time::Instant;

/// Sequential export driver
pub struct ExportDriver {
    exporter: Arc<dyn Exporter>,
    observer: Arc<dyn RunObserver>,
}

impl ExportDriver {
    /// Create a driver over an exporter and an observer
    pub fn new(exporter: Arc<dyn Exporter>, observer: Arc<dyn RunObserver>) -> Self {
        Self { exporter, observer }
    }

    /// Export every enabled entry of `models`, in order
    ///
    /// Each invocation is awaited before the next one starts. Disabled
    /// entries are skipped silently.
    pub async fn run(&self, models: &ModelList) -> RunReport {
        let total = models.active_count();
        let started = Instant::now();
        let mut report = RunReport::new();

        tracing::debug!(
            total,
            skipped = models.len() - total,
            "Starting export run"
        );

        for (index, model) in models.active().enumerate() {
            log_run_progress!(index + 1, total);
            self.observer.on_start(model);

            let outcome = self.exporter.export(model).await;
            if let InvocationOutcome::Failed(failure) = &outcome {
                self.observer.on_failure(failure);
            }

            report.record(model.clone(), outcome);
        }

        tracing::debug!(
            attempted = report.attempted(),
            duration_ms = started.elapsed().as_millis(),
            "Export run finished"
        );

        report
    }
}
