//! Validate config command implementation

use crate::config::load_config_or_builtin;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("<built-in>");
        tracing::debug!(config_path = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        // load_config_or_builtin validates as part of loading
        let config = match load_config_or_builtin(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Exporter: {} {}", config.exporter.program, config.exporter.args.join(" "));
        println!("  Mode: {}", config.exporter.mode);
        if let Some(dir) = &config.exporter.working_dir {
            println!("  Working Directory: {dir}");
        }
        println!(
            "  Models: {} enabled, {} total",
            config.models.active_count(),
            config.models.len()
        );
        println!();

        Ok(0)
    }
}
