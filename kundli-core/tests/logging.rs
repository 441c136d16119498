//! Logging writes where it says it does
//!
//! Lives in its own test binary: `init` installs a process-wide subscriber
//! and the test points `XDG_STATE_HOME` at a temp dir.

use kundli_core::config::LoggingConfig;
use kundli_core::{logging, Config};

#[test]
fn test_init_writes_rotated_file_in_state_dir() {
    let state = tempfile::TempDir::new().expect("failed to create temp dir");
    std::env::set_var("XDG_STATE_HOME", state.path());
    std::env::remove_var("RUST_LOG");

    let config = LoggingConfig::default();
    let guard = logging::init(&config).expect("logging should initialize");
    assert_eq!(guard.log_dir(), Config::state_dir());
    assert_eq!(guard.log_dir(), state.path().join("kundli"));

    tracing::info!(marker = "kundli-log-check", "Writing a line");
    let log_dir = guard.log_dir().to_path_buf();
    drop(guard);

    let files = logging::log_files(&log_dir).expect("log dir should be readable");
    assert_eq!(files.len(), 1, "expected one rotated file, got {files:?}");

    let name = files[0]
        .file_name()
        .and_then(|n| n.to_str())
        .expect("log file name should be UTF-8");
    assert!(name.starts_with("kundli.") && name.ends_with(".log"));
    assert_ne!(name, "kundli.log");

    let content = std::fs::read_to_string(&files[0]).expect("log file should be readable");
    assert!(content.contains("Logging initialized"));
    assert!(content.contains("kundli-log-check"));
}
