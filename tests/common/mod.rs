// tests/common/mod.rs - Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
pub use tempfile::TempDir;

/// Resolve the compiled binary from the workspace target directory
pub fn jsmetrics_bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .to_path_buf();

    if path.ends_with("deps") {
        path.pop();
    }
    path.join("jsmetrics")
}

/// Execute the jsmetrics binary with given arguments. Colors are disabled and
/// the user's global config is hidden so output is deterministic.
pub fn run_jsmetrics(args: &[&str]) -> std::process::Output {
    std::process::Command::new(jsmetrics_bin())
        .args(args)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("jsmetrics-tests-no-config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute jsmetrics binary")
}

/// Create a temporary directory with a set of named files and content.
pub fn make_fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("TempDir::new");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    dir
}

/// Value printed next to `label` in console output, if any.
pub fn console_value(stdout: &str, label: &str) -> Option<String> {
    let prefix = format!("{}:", label);
    stdout
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with(&prefix))
        .map(|l| l[prefix.len()..].trim().to_string())
}
