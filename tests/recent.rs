mod common;

use assert_cmd::prelude::*;
use common::{create_file, packager_cmd};
use filetime::{set_file_mtime, FileTime};
use predicates::prelude::*;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

fn backdate(path: &std::path::Path, days: u64) -> std::io::Result<()> {
    let then = SystemTime::now() - Duration::from_secs(days * 86_400 + 60);
    set_file_mtime(path, FileTime::from_system_time(then))
}

#[test]
fn test_recent_keeps_only_recent_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "fresh.txt", "fresh")?;
    create_file(temp.path(), "stale.txt", "stale")?;
    create_file(temp.path(), "mid.txt", "mid")?;
    backdate(&temp.path().join("stale.txt"), 30)?;
    backdate(&temp.path().join("mid.txt"), 3)?;

    packager_cmd()
        .args([".", "--recent"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("stale.txt").not())
        .stdout(predicate::str::contains(
            "## Recent Changes\n\n- fresh.txt (modified 0 days ago)\n- mid.txt (modified 3 days ago)\n\n## Summary",
        ))
        .stdout(predicate::str::contains("- Total files: 2"));
    Ok(())
}

#[test]
fn test_recent_with_nothing_recent_is_no_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "old.txt", "old")?;
    backdate(&temp.path().join("old.txt"), 10)?;

    packager_cmd()
        .args([".", "-r"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No files found in the specified paths."));
    Ok(())
}

#[test]
fn test_recent_with_dirs_only_keeps_recent_section() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "fresh.txt", "fresh")?;

    packager_cmd()
        .args([".", "-r", "-d"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("## File Contents").not())
        .stdout(predicate::str::contains("## Recent Changes\n\n- fresh.txt (modified 0 days ago)"));
    Ok(())
}

#[test]
fn test_without_recent_flag_has_no_section() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "old.txt", "old")?;
    backdate(&temp.path().join("old.txt"), 10)?;

    packager_cmd()
        .arg(".")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("## Recent Changes").not())
        .stdout(predicate::str::contains("old.txt"));
    Ok(())
}
