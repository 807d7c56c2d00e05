// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn packager_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("repo-code-packager"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Creates `relative_path` under `dir_path`, including missing parents.
#[allow(dead_code)]
pub fn create_file(
    dir_path: &Path,
    relative_path: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}
