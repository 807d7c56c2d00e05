// src/config/builder.rs

use super::{
    Config, DiscoveryConfig, FileDefaults, OutputConfig, OutputDestination, OutputStyle,
    ProcessingConfig,
};
use crate::cli::Cli;
use crate::constants::{DEFAULT_EXCLUDED_DIRS, DEFAULT_RECENT_DAYS};
use crate::errors::{ConfigError, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A builder for creating a `Config` instance programmatically.
///
/// Values set directly on the builder (or taken from the CLI) win over values
/// from a [`FileDefaults`]. Boolean flags can only be switched on: a flag is
/// on when either the CLI or the defaults file turns it on.
///
/// # Examples
///
/// ```
/// use repo_code_packager::config::{ConfigBuilder, OutputStyle};
///
/// let config = ConfigBuilder::new()
///     .input_path("src")
///     .line_numbers(true)
///     .style(OutputStyle::Json)
///     .build()
///     .unwrap();
///
/// assert!(config.processing.line_numbers);
/// assert!(config.discovery.excluded_dirs.contains("venv"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    input_paths: Vec<String>,
    output_file: Option<String>,
    tokens: Option<bool>,
    recent: Option<bool>,
    line_numbers: Option<bool>,
    dirs_only: Option<bool>,
    style: Option<OutputStyle>,
    exclude_dirs: Vec<String>,
    file_defaults: Option<FileDefaults>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with no inputs and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_paths: cli.paths,
            output_file: cli.output_file,
            tokens: cli.tokens.then_some(true),
            recent: cli.recent.then_some(true),
            line_numbers: cli.line_numbers.then_some(true),
            dirs_only: cli.dirs_only.then_some(true),
            style: cli.style,
            exclude_dirs: Vec::new(),
            file_defaults: None,
        }
    }

    /// Appends an input path.
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_paths.push(path.into());
        self
    }

    /// Replaces all input paths.
    pub fn input_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Writes the document to this file instead of stdout.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Reports an estimated token count.
    pub fn tokens(mut self, tokens: bool) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Keeps only files modified within the default recency window.
    pub fn recent(mut self, recent: bool) -> Self {
        self.recent = Some(recent);
        self
    }

    /// Prefixes content lines with their line number.
    pub fn line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = Some(line_numbers);
        self
    }

    /// Emits only the structure, without file contents.
    pub fn dirs_only(mut self, dirs_only: bool) -> Self {
        self.dirs_only = Some(dirs_only);
        self
    }

    /// Selects the document style.
    pub fn style(mut self, style: OutputStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Adds a directory name to prune during discovery.
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.exclude_dirs.push(name.into());
        self
    }

    /// Supplies defaults loaded from a TOML file.
    pub fn file_defaults(mut self, defaults: Option<FileDefaults>) -> Self {
        self.file_defaults = defaults;
        self
    }

    /// Resolves all settings into an immutable `Config`.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingInput` when no input path was given, and
    /// `ConfigError::InvalidValue` when the output path names a directory.
    pub fn build(self) -> Result<Config> {
        if self.input_paths.is_empty() {
            return Err(ConfigError::MissingInput.into());
        }
        let defaults = self.file_defaults.unwrap_or_default();

        let flag = |cli: Option<bool>, file: Option<bool>| -> bool {
            cli.unwrap_or(false) || file.unwrap_or(false)
        };

        let excluded_dirs: BTreeSet<String> = DEFAULT_EXCLUDED_DIRS
            .iter()
            .map(|s| s.to_string())
            .chain(defaults.exclude_dirs)
            .chain(self.exclude_dirs)
            .collect();
        log::debug!("Excluded directory names: {:?}", excluded_dirs);

        let output_destination = match self.output_file.or(defaults.output) {
            Some(path) if !path.trim().is_empty() => {
                let path = PathBuf::from(path);
                if path.is_dir() {
                    return Err(ConfigError::InvalidValue {
                        option: "--output".to_string(),
                        reason: format!("'{}' is a directory", path.display()),
                    }
                    .into());
                }
                OutputDestination::File(path)
            }
            _ => OutputDestination::Stdout,
        };

        let recent = flag(self.recent, defaults.recent);

        Ok(Config {
            input_paths: self.input_paths,
            discovery: DiscoveryConfig {
                excluded_dirs,
                recent_days: recent.then_some(DEFAULT_RECENT_DAYS),
            },
            processing: ProcessingConfig {
                line_numbers: flag(self.line_numbers, defaults.line_numbers),
            },
            output: OutputConfig {
                style: self.style.or(defaults.style).unwrap_or_default(),
                dirs_only: flag(self.dirs_only, defaults.dirs_only),
                tokens: flag(self.tokens, defaults.tokens),
            },
            output_destination,
        })
    }
}
