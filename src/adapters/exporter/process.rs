//! Subprocess-backed exporter
//!
//! Runs `program args... <model-id> <mode>` and waits for it to exit. The
//! child inherits stdin, stdout and stderr, so the exporter's own output
//! appears inline with the runner's progress lines.

use super::traits::Exporter;
use crate::config::ExporterConfig;
use crate::core::outcome::{ExportFailure, InvocationOutcome};
use crate::domain::ModelId;
use async_trait::async_trait;
use tokio::process::Command;

/// Exporter that launches the configured command once per model
#[derive(Debug, Clone)]
pub struct ProcessExporter {
    config: ExporterConfig,
}

impl ProcessExporter {
    /// Create a new process exporter
    pub fn new(config: ExporterConfig) -> Self {
        Self { config }
    }

    /// Full argument vector for `model`, program first
    pub fn command_line(&self, model: &ModelId) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.config.args.len() + 3);
        argv.push(self.config.program.clone());
        argv.extend(self.config.args.iter().cloned());
        argv.push(model.as_str().to_string());
        argv.push(self.config.mode.clone());
        argv
    }

    fn command(&self, model: &ModelId) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.args)
            .arg(model.as_str())
            .arg(&self.config.mode)
            .envs(&self.config.env);
        if let Some(dir) = &self.config.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[async_trait]
impl Exporter for ProcessExporter {
    async fn export(&self, model: &ModelId) -> InvocationOutcome {
        tracing::debug!(
            model = %model,
            command = %self.describe(model),
            working_dir = ?self.config.working_dir,
            "Launching exporter"
        );

        match self.command(model).status().await {
            Ok(status) if status.success() => {
                tracing::debug!(model = %model, "Exporter finished");
                InvocationOutcome::Succeeded
            }
            Ok(status) => {
                let detail = match status.code() {
                    Some(code) => format!(
                        "Command '{}' returned non-zero exit status {}",
                        self.describe(model),
                        code
                    ),
                    None => format!(
                        "Command '{}' terminated abnormally ({})",
                        self.describe(model),
                        status
                    ),
                };
                InvocationOutcome::Failed(ExportFailure::new(model.clone(), detail))
            }
            Err(e) => InvocationOutcome::Failed(ExportFailure::new(
                model.clone(),
                format!("Failed to launch '{}': {}", self.config.program, e),
            )),
        }
    }

    fn describe(&self, model: &ModelId) -> String {
        self.command_line(model).join(" ")
    }
}
