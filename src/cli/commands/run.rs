//! Run command implementation
//!
//! Loads the catalog, applies CLI overrides and drives the exporter over
//! every enabled model. Per-model failures are reported inline and do not
//! change the exit code.

use crate::adapters::exporter::{DryRunExporter, Exporter, ProcessExporter};
use crate::config::load_config_or_builtin;
use crate::core::{ConsoleObserver, ExportDriver};
use crate::domain::{ModelId, ModelList};
use clap::Args;
use std::sync::Arc;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Export only these models (comma-separated), in the given order
    #[arg(short, long)]
    pub model: Option<String>,

    /// Override the mode string passed to the exporter
    #[arg(long)]
    pub mode: Option<String>,

    /// Override the exporter program
    #[arg(long)]
    pub program: Option<String>,

    /// Print the commands that would run without launching them
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::debug!("Starting run command");

        let mut config = match load_config_or_builtin(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(mode) = &self.mode {
            tracing::debug!(mode = %mode, "Overriding exporter mode from CLI");
            config.exporter.mode = mode.clone();
        }

        if let Some(program) = &self.program {
            tracing::debug!(program = %program, "Overriding exporter program from CLI");
            config.exporter.program = program.clone();
        }

        if let Err(e) = config.validate() {
            tracing::debug!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let models = match &self.model {
            Some(raw) => match parse_model_list(raw) {
                Ok(list) => {
                    tracing::debug!(count = list.len(), "Overriding model list from CLI");
                    list
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Invalid --model value");
                    eprintln!("Invalid --model value: {e}");
                    return Ok(2);
                }
            },
            None => config.models.clone(),
        };

        let exporter: Arc<dyn Exporter> = if self.dry_run {
            tracing::debug!("Dry run mode enabled - exporter will not be launched");
            Arc::new(DryRunExporter::new(config.exporter.clone()))
        } else {
            Arc::new(ProcessExporter::new(config.exporter.clone()))
        };

        let driver = ExportDriver::new(exporter, Arc::new(ConsoleObserver::stdout()));
        driver.run(&models).await;

        Ok(0)
    }
}

/// Parses a comma-separated model list; blank segments are ignored
fn parse_model_list(raw: &str) -> Result<ModelList, String> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ModelId::new)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ModelList::from_ids(ids))
}
