mod common;

use assert_cmd::prelude::*;
use common::{create_file, packager_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_default_config_file_is_picked_up() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a")?;
    create_file(temp.path(), "build/out.txt", "generated")?;
    create_file(
        temp.path(),
        ".repo-code-packager-config.toml",
        "line_numbers = true\nexclude_dirs = [\"build\"]\n",
    )?;

    packager_cmd()
        .arg(".")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("```text\n1: a\n```"))
        .stdout(predicate::str::contains("build").not());
    Ok(())
}

#[test]
fn test_explicit_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a")?;
    create_file(temp.path(), "conf/settings.toml", "style = \"json\"\n")?;

    packager_cmd()
        .args([".", "--config", "conf/settings.toml"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"structure_tree\": \"├── a.txt\\n└── conf\\n    └── settings.toml\""));
    Ok(())
}

#[test]
fn test_missing_explicit_config_file_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a")?;

    packager_cmd()
        .args([".", "--config", "missing.toml"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Cannot read config file \"missing.toml\""));
    Ok(())
}

#[test]
fn test_missing_default_config_file_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a")?;

    packager_cmd()
        .arg(".")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("### File: a.txt"));
    Ok(())
}

#[test]
fn test_cli_style_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a")?;
    create_file(temp.path(), ".repo-code-packager-config.toml", "style = \"json\"\n")?;

    packager_cmd()
        .args([".", "--style", "markdown"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Repository Context"));
    Ok(())
}

#[test]
fn test_invalid_toml_is_fatal_before_discovery() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a")?;
    create_file(temp.path(), ".repo-code-packager-config.toml", "invalid_arg")?;

    packager_cmd()
        .arg(".")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Cannot parse config file"));
    Ok(())
}

#[test]
fn test_config_output_key_writes_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/a.txt", "a")?;
    create_file(
        temp.path(),
        ".repo-code-packager-config.toml",
        "output = \"context.md\"\n",
    )?;

    packager_cmd()
        .arg("src")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Context successfully written to context.md"));
    assert!(temp.path().join("context.md").is_file());
    Ok(())
}
