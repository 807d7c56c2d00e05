// src/config/file.rs

//! Loads the optional TOML defaults file.

use crate::cli::OutputStyle;
use crate::errors::ConfigError;
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Option defaults read from the TOML file.
///
/// Every key is optional. Keys this tool does not recognize are kept in
/// `unrecognized` so they can be reported instead of silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileDefaults {
    /// Default output file. An empty string means stdout.
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub tokens: Option<bool>,
    #[serde(default)]
    pub recent: Option<bool>,
    #[serde(default)]
    pub line_numbers: Option<bool>,
    #[serde(default)]
    pub dirs_only: Option<bool>,
    #[serde(default)]
    pub style: Option<OutputStyle>,
    /// Directory names to prune during discovery.
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, toml::Value>,
}

/// Reads and parses the defaults file at `path`.
///
/// Returns `Ok(None)` when the file does not exist. A file that exists but
/// cannot be read or parsed is a fatal configuration error.
pub fn load_config_file(path: &Path) -> Result<Option<FileDefaults>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(path, &content).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No config file at {}, using built-in defaults.", path.display());
            Ok(None)
        }
        Err(e) => Err(read_error(path, e)),
    }
}

/// Reads and parses a defaults file the user named explicitly.
///
/// Unlike [`load_config_file`], a missing file is an error.
pub fn load_required_config_file(path: &Path) -> Result<FileDefaults, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    parse_config(path, &content)
}

fn read_error(path: &Path, source: io::Error) -> ConfigError {
    ConfigError::Read {
        path: path.display().to_string(),
        source,
    }
}

fn parse_config(path: &Path, content: &str) -> Result<FileDefaults, ConfigError> {
    info!("Loading configuration from: {}", path.display());
    let defaults: FileDefaults = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })?;

    for key in defaults.unrecognized.keys() {
        warn!("Ignoring unrecognized config key '{}' in {}", key, path.display());
    }
    debug!("Config file defaults: {:?}", defaults);
    Ok(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_returns_none_when_file_missing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = load_config_file(&temp.path().join("non-existent.toml"))?;
        assert!(result.is_none());
        Ok(())
    }

    #[test]
    fn test_required_file_missing_is_read_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let err = load_required_config_file(&temp.path().join("missing.toml")).unwrap_err();
        match &err {
            ConfigError::Read { path, source } => {
                assert!(path.ends_with("missing.toml"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected a read error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("Cannot read config file"));
        Ok(())
    }

    #[test]
    fn test_required_file_loads_like_optional_one() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "tokens = true\n")?;
        let required = load_required_config_file(&path)?;
        assert_eq!(Some(required.clone()), load_config_file(&path)?);
        assert_eq!(required.tokens, Some(true));
        Ok(())
    }

    #[test]
    fn test_loads_valid_toml_config() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            output = ""
            tokens = false
            recent = true
            line_numbers = false
            dirs_only = true
            style = "json"
            exclude_dirs = ["__pycache__", "venv", ".git"]
            "#,
        )?;

        let defaults = load_config_file(&path)?.expect("config should load");
        assert_eq!(defaults.output.as_deref(), Some(""));
        assert_eq!(defaults.tokens, Some(false));
        assert_eq!(defaults.recent, Some(true));
        assert_eq!(defaults.line_numbers, Some(false));
        assert_eq!(defaults.dirs_only, Some(true));
        assert_eq!(defaults.style, Some(OutputStyle::Json));
        assert_eq!(defaults.exclude_dirs, vec!["__pycache__", "venv", ".git"]);
        assert!(defaults.unrecognized.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_parse_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("bad_config.toml");
        fs::write(&path, "invalid_arg")?;

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Cannot parse config file"));
        Ok(())
    }

    #[test]
    fn test_wrong_value_type_is_parse_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("typed.toml");
        fs::write(&path, "tokens = \"yes\"")?;
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigError::Parse { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_kept_aside() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("extra.toml");
        fs::write(&path, "recent = true\ncolour = \"blue\"")?;
        let defaults = load_config_file(&path)?.expect("config should load");
        assert_eq!(defaults.recent, Some(true));
        assert!(defaults.unrecognized.contains_key("colour"));
        Ok(())
    }
}
