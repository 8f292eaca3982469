//! List command implementation

use crate::config::load_config_or_builtin;
use crate::domain::ModelEntry;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Include disabled entries
    #[arg(short, long)]
    pub all: bool,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let config = match load_config_or_builtin(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let entries = self.select(config.models.entries());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(0);
        }

        for entry in &entries {
            let marker = if entry.enabled { "x" } else { " " };
            match &entry.note {
                Some(note) => println!("[{marker}] {}  ({note})", entry.id),
                None => println!("[{marker}] {}", entry.id),
            }
        }
        println!();
        println!(
            "{} of {} models enabled",
            config.models.active_count(),
            config.models.len()
        );

        Ok(0)
    }

    fn select<'a>(&self, entries: &'a [ModelEntry]) -> Vec<&'a ModelEntry> {
        entries.iter().filter(|e| self.all || e.enabled).collect()
    }
}
