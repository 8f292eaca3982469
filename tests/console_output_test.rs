//! Integration tests for what a user sees on the terminal during a run
//!
//! The console observer writes into one buffer and a tracing subscriber built
//! from the default console filter writes into another. At the default level
//! the progress lines must appear once, and only in the observer's output.

use async_trait::async_trait;
use export_runner::adapters::exporter::Exporter;
use export_runner::core::{ConsoleObserver, ExportDriver, ExportFailure, InvocationOutcome};
use export_runner::domain::{ModelEntry, ModelId, ModelList};
use export_runner::logging::console_filter;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails only for "B"
struct FailsForB;

#[async_trait]
impl Exporter for FailsForB {
    async fn export(&self, model: &ModelId) -> InvocationOutcome {
        if model.as_str() == "B" {
            InvocationOutcome::Failed(ExportFailure::new(
                model.clone(),
                "Command 'python export.py B openclip' returned non-zero exit status 1",
            ))
        } else {
            InvocationOutcome::Succeeded
        }
    }

    fn describe(&self, model: &ModelId) -> String {
        format!("python export.py {model} openclip")
    }
}

fn ids(raw: &[&str]) -> ModelList {
    ModelList::from_ids(raw.iter().map(|s| ModelId::new(*s).unwrap()))
}

async fn run_captured(models: &ModelList, level: &str) -> (String, String) {
    let stdout = SharedBuffer::default();
    let logs = SharedBuffer::default();

    let log_writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(console_filter(level).unwrap())
        .with_writer(move || log_writer.clone())
        .with_ansi(false)
        .finish();
    let _default = tracing::subscriber::set_default(subscriber);

    let driver = ExportDriver::new(
        Arc::new(FailsForB),
        Arc::new(ConsoleObserver::with_writer(stdout.clone())),
    );
    driver.run(models).await;

    (stdout.contents(), logs.contents())
}

#[tokio::test]
async fn test_one_line_per_event_at_default_level() {
    let (stdout, logs) = run_captured(&ids(&["A", "B", "C"]), "info").await;

    assert_eq!(
        stdout,
        "Exporting model A\n\
         Exporting model B\n\
         Failed to export model B: Command 'python export.py B openclip' returned non-zero exit status 1\n\
         Exporting model C\n"
    );
    assert_eq!(logs, "", "default level must not repeat progress or add a summary");
}

#[tokio::test]
async fn test_empty_list_prints_nothing() {
    let (stdout, logs) = run_captured(&ModelList::default(), "info").await;

    assert_eq!(stdout, "");
    assert_eq!(logs, "");
}

#[tokio::test]
async fn test_disabled_entry_prints_nothing() {
    let models = ModelList::new(vec![
        ModelEntry::new(ModelId::new("A").unwrap()),
        ModelEntry::new(ModelId::new("B").unwrap()).disabled(),
    ]);
    let (stdout, logs) = run_captured(&models, "info").await;

    assert_eq!(stdout, "Exporting model A\n");
    assert_eq!(logs, "");
}

#[tokio::test]
async fn test_debug_level_mirrors_progress_into_logs() {
    let (stdout, logs) = run_captured(&ids(&["A", "B"]), "debug").await;

    assert_eq!(stdout.lines().count(), 3);
    assert!(logs.contains("Exporting model"));
    assert!(logs.contains("Failed to export model"));
}
