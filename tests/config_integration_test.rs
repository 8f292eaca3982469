//! Integration tests for configuration loading and validation
//!
//! Tests that touch EXPORT_RUNNER_* variables hold ENV_MUTEX so they do not
//! observe each other's overrides.

use export_runner::config::{load_builtin_config, load_config, load_config_or_builtin};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("EXPORT_RUNNER_EXPORTER_MODE");
    std::env::remove_var("EXPORT_RUNNER_EXPORTER_PROGRAM");
    std::env::remove_var("EXPORT_RUNNER_EXPORTER_WORKING_DIR");
    std::env::remove_var("EXPORT_RUNNER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("EXPORT_RUNNER_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("CONFIG_TEST_EXPORT_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[exporter]
program = "python3"
args = ["export.py"]
mode = "openclip"
working_dir = "machine-learning/export"

[exporter.env]
HF_HUB_OFFLINE = "1"

[logging]
local_enabled = true
local_path = "/tmp/export-runner-logs"
local_rotation = "hourly"

[[models]]
id = "ViT-SO400M-14-SigLIP2__webli"

[[models]]
id = "ViT-B-32-SigLIP2-384__webli"
enabled = false
note = "not available yet"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(
        config.exporter.working_dir.as_deref(),
        Some("machine-learning/export")
    );
    assert_eq!(
        config.exporter.env.get("HF_HUB_OFFLINE").map(String::as_str),
        Some("1")
    );
    assert!(config.logging.local_enabled);
    assert_eq!(config.models.len(), 2);
    assert_eq!(config.models.active_count(), 1);
    assert_eq!(
        config.models.entries()[1].note.as_deref(),
        Some("not available yet")
    );
}

#[test]
fn test_env_substitution_in_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("CONFIG_TEST_EXPORT_DIR", "/srv/export");

    let file = write_config(
        r#"
[exporter]
working_dir = "${CONFIG_TEST_EXPORT_DIR}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.exporter.working_dir.as_deref(), Some("/srv/export"));
    cleanup_env_vars();
}

#[test]
fn test_env_overrides_apply_to_builtin() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("EXPORT_RUNNER_EXPORTER_MODE", "mclip");
    std::env::set_var("EXPORT_RUNNER_EXPORTER_PROGRAM", "python3");

    let config = load_builtin_config().unwrap();
    assert_eq!(config.exporter.mode, "mclip");
    assert_eq!(config.exporter.program, "python3");
    cleanup_env_vars();
}

#[test]
fn test_invalid_override_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("EXPORT_RUNNER_APPLICATION_LOG_LEVEL", "chatty");

    let result = load_builtin_config();
    assert!(result.is_err());
    cleanup_env_vars();
}

#[test]
fn test_non_boolean_local_logging_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("EXPORT_RUNNER_LOGGING_LOCAL_ENABLED", "yes");

    let err = load_builtin_config().unwrap_err();
    assert!(err
        .to_string()
        .contains("EXPORT_RUNNER_LOGGING_LOCAL_ENABLED"));

    std::env::set_var("EXPORT_RUNNER_LOGGING_LOCAL_ENABLED", "true");
    let config = load_builtin_config().unwrap();
    assert!(config.logging.local_enabled);
    cleanup_env_vars();
}

#[test]
fn test_builtin_catalog_active_subset() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let config = load_config_or_builtin(None).unwrap();
    let active: Vec<&str> = config.models.active().map(|m| m.as_str()).collect();
    assert_eq!(
        active,
        vec![
            "ViT-SO400M-14-SigLIP2__webli",
            "ViT-SO400M-14-SigLIP2-378__webli",
            "ViT-SO400M-16-SigLIP2-256__webli",
            "ViT-SO400M-16-SigLIP2-384__webli",
            "ViT-SO400M-16-SigLIP2-512__webli",
        ]
    );
    assert_eq!(config.exporter.program, "python");
    assert_eq!(config.exporter.args, vec!["export.py"]);
    assert_eq!(config.exporter.mode, "openclip");
}

#[test]
fn test_empty_file_uses_defaults_and_no_models() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert!(config.models.is_empty());
    assert_eq!(config.exporter.mode, "openclip");
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_config("[[models]\nid = ");
    assert!(load_config(file.path()).is_err());
}
