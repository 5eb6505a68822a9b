// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Write an NDJSON log file holding one record per status code.
pub fn write_log_file(dir: &Path, name: &str, statuses: &[u16]) -> PathBuf {
    let mut content = String::new();
    for (i, status) in statuses.iter().enumerate() {
        content.push_str(&format!(
            "{{\"timestamp\":\"2025-01-10T00:00:{:02}.000Z\",\"method\":\"GET\",\"path\":\"/api/health\",\"status\":{},\"response_time_ms\":12,\"bytes\":512,\"user_id\":\"user_{}\",\"ip\":\"10.0.0.1\"}}\n",
            i % 60,
            status,
            i
        ));
    }
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write log file");
    path
}

/// Create a temp dir pre-populated with log files.
pub fn log_dir(specs: &[(&str, &[u16])]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for (name, statuses) in specs {
        write_log_file(dir.path(), name, statuses);
    }
    dir
}

/// Run the logtally binary, returning stdout, stderr and exit code.
pub fn run_logtally(args: &[&str]) -> (String, String, i32) {
    run_binary(env!("CARGO_BIN_EXE_logtally"), args)
}

/// Run the loggen binary, returning stdout, stderr and exit code.
pub fn run_loggen(args: &[&str]) -> (String, String, i32) {
    run_binary(env!("CARGO_BIN_EXE_loggen"), args)
}

fn run_binary(binary: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {binary}: {e}"));
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}
