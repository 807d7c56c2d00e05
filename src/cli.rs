// src/cli.rs

use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// Packages a source directory into a single context document.
///
/// repo-code-packager walks the given files and directories (skipping hidden
/// entries and excluded directories) and produces one document containing the
/// location, git metadata, a directory tree, the file contents and summary
/// statistics, suitable for a human reviewer or a Large Language Model.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Paths to files or directories to include in the context.
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Path to the output file. If not specified, prints to standard output.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    /// Estimate and display the token count for the context.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub tokens: bool,

    /// Only include files modified within the last 7 days.
    #[arg(short = 'r', long, action = clap::ArgAction::SetTrue)]
    pub recent: bool,

    /// Include line numbers in the file content output.
    #[arg(short = 'l', long, action = clap::ArgAction::SetTrue)]
    pub line_numbers: bool,

    /// Show only the directory structure without file contents.
    #[arg(short = 'd', long, action = clap::ArgAction::SetTrue)]
    pub dirs_only: bool,

    /// The output format.
    #[arg(long, value_enum, value_name = "STYLE")]
    pub style: Option<OutputStyle>,

    /// Path to the TOML defaults file.
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<String>,
}

/// The two document styles the report formatter can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Sectioned, human-oriented Markdown.
    #[default]
    Markdown,
    /// Pretty-printed JSON with a stable key order.
    Json,
}
