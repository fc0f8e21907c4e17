//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A vue project on the dark-mode style with two pages and a custom scale.
pub const SAMPLE_PROJECT: &str = r##"style = "dark-mode"
pages = ["analytics-dashboard", "login-page"]
components = ["navbar", "data-table", "input-field"]

[project]
name = "Acme UI"
description = "Acme product design system"
author = "Acme Design"
framework = "vue"

[scales]
success = "#00aa00"

[tokens.colors.primary]
500 = "#ff0000"
"##;

/// A react project with no pages, using only defaults.
pub const MINIMAL_PROJECT: &str = r#"[project]
name = "Minimal"
framework = "react"
"#;

/// Path to the tokenforge binary
pub fn tokenforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tokenforge")
}

/// Creates a Command whose config directory is `config_dir`.
///
/// Every test runs against an isolated config so the developer's own
/// settings never leak in.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(tokenforge_bin());
    cmd.env("TOKENFORGE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs `args` with a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Writes `content` to `name` inside a new temp dir.
pub fn write_project(content: &str, name: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write project");
    (path, temp_dir)
}

/// Writes [`SAMPLE_PROJECT`] to a temp dir.
pub fn sample_project() -> (PathBuf, TempDir) {
    write_project(SAMPLE_PROJECT, "tokenforge.toml")
}

/// Entry names of a zip archive, in archive order.
pub fn zip_entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).expect("Invalid zip");
    archive.file_names().map(str::to_string).collect()
}

/// Text of one zip entry.
pub fn zip_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).expect("Invalid zip");
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("Missing zip entry {name}"))
        .read_to_string(&mut content)
        .expect("Entry is not UTF-8");
    content
}

/// stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
