//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates the settings parsed from the CLI and the optional
//! TOML defaults file into one immutable value that is passed explicitly into
//! every stage of the pipeline.

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use crate::cli::OutputStyle;
pub use builder::ConfigBuilder;
pub use file::{load_config_file, load_required_config_file, FileDefaults};
pub use path_resolve::{absolute_path, resolve_base_path};

mod builder;
mod file;
mod path_resolve;

/// Configuration options related to file discovery and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Directory names pruned anywhere in the walk, in addition to hidden directories.
    pub excluded_dirs: BTreeSet<String>,
    /// When `Some(days)`, only files modified within that many days are kept.
    pub recent_days: Option<u64>,
}

/// Configuration options related to processing file content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingConfig {
    /// Whether to prefix each content line with `N: `.
    pub line_numbers: bool,
}

/// Configuration options related to formatting the final output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Which document style to produce.
    pub style: OutputStyle,
    /// Skip content aggregation and omit the file contents section.
    pub dirs_only: bool,
    /// Report an estimated token count on stderr.
    pub tokens: bool,
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

/// Holds all resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The input paths as given on the command line, in order.
    pub input_paths: Vec<String>,
    /// Configuration for the discovery stage.
    pub discovery: DiscoveryConfig,
    /// Configuration for the processing stage.
    pub processing: ProcessingConfig,
    /// Configuration for the output stage.
    pub output: OutputConfig,
    /// Specifies where the final output should be written.
    pub output_destination: OutputDestination,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_paths: vec![".".to_string()],
            discovery: DiscoveryConfig {
                excluded_dirs: crate::constants::DEFAULT_EXCLUDED_DIRS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                recent_days: None,
            },
            processing: ProcessingConfig::default(),
            output: OutputConfig::default(),
            output_destination: OutputDestination::Stdout,
        }
    }
}
