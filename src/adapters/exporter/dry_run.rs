//! Dry-run exporter
//!
//! Prints the command that would be launched and reports success without
//! spawning anything.

use super::process::ProcessExporter;
use super::traits::Exporter;
use crate::config::ExporterConfig;
use crate::core::outcome::InvocationOutcome;
use crate::domain::ModelId;
use async_trait::async_trait;

/// Exporter that only prints what it would run
#[derive(Debug, Clone)]
pub struct DryRunExporter {
    inner: ProcessExporter,
}

impl DryRunExporter {
    /// Create a dry-run exporter for the given command
    pub fn new(config: ExporterConfig) -> Self {
        Self {
            inner: ProcessExporter::new(config),
        }
    }
}

#[async_trait]
impl Exporter for DryRunExporter {
    async fn export(&self, model: &ModelId) -> InvocationOutcome {
        let command = self.describe(model);
        tracing::debug!(model = %model, command = %command, "Dry run, not launching exporter");
        println!("  Would run: {command}");
        InvocationOutcome::Succeeded
    }

    fn describe(&self, model: &ModelId) -> String {
        self.inner.describe(model)
    }
}
