//! `repo-code-packager` is a library and command-line tool that packages a
//! source directory into a single context document.
//!
//! The document carries the directory's location, git metadata, a box-drawing
//! tree of the included files, the file contents and summary statistics. It is
//! meant to be handed to a human reviewer or a Large Language Model.
//!
//! As a library, it provides a small, explicit pipeline:
//! 1.  **Discover**: Find the files under the input paths, skipping hidden
//!     entries and excluded directories, optionally keeping only recent files.
//! 2.  **Assemble**: Render the tree, aggregate file contents, read git
//!     metadata and build the summary into one [`ReportData`].
//! 3.  **Format**: Serialize the report as Markdown or JSON.
//!
//! # Example: Library Usage
//!
//! ```
//! use repo_code_packager::{execute, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("hello.rs"), "fn main() {}\n").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .input_path(temp_dir.path().to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let context = execute(&config).unwrap();
//! assert!(context.document.starts_with("# Repository Context"));
//! assert!(context.document.contains("### File: hello.rs\n```rust\nfn main() {}\n"));
//! assert!(context.document.ends_with("- Total files: 1\n- Total lines: 2"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod git;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod tree;

pub use config::{Config, ConfigBuilder, OutputDestination, OutputStyle};
pub use core_types::{PackagedContext, ReportData};
pub use discovery::discover_files;
pub use errors::{Error, Result};
pub use tree::render_tree;

use crate::config::resolve_base_path;
use crate::core_types::{Aggregation, Totals};
use crate::errors::ConfigError;
use crate::filtering::is_recently_modified_at;
use crate::output::{collect_recent_changes, formatter_for, RecentSection};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Discovers the files to package.
///
/// This is the first stage of the pipeline. It walks every input path and,
/// when a recency window is configured, keeps only files modified within it.
///
/// # Errors
/// Returns `Error::NoFilesFound` if nothing survives discovery and filtering.
pub fn discover(config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = discover_files(&config.input_paths, &config.discovery.excluded_dirs);
    debug!("Discovered {} files", files.len());

    if let Some(days) = config.discovery.recent_days {
        let now = SystemTime::now();
        files.retain(|path| is_recently_modified_at(path, days, now));
        debug!("{} files modified in the last {} days", files.len(), days);
    }

    if files.is_empty() {
        return Err(Error::NoFilesFound);
    }
    Ok(files)
}

/// Assembles the report sections for an already discovered file set.
///
/// Content aggregation is skipped entirely in directory-only mode, leaving
/// `file_contents` empty and the totals at zero.
pub fn build_report(
    files: &[PathBuf],
    base_path: &Path,
    config: &Config,
) -> (ReportData, Totals) {
    let structure_tree = render_tree(files, base_path);

    let Aggregation { body, totals, .. } = if config.output.dirs_only {
        debug!("Directory-only mode; skipping content aggregation.");
        Aggregation::default()
    } else {
        processing::aggregate_contents(files, base_path, &config.processing)
    };

    let report = ReportData {
        base_path: base_path.display().to_string(),
        git_info: git::git_info_text(base_path),
        structure_tree,
        file_contents: body,
        summary: output::build_summary(files, totals.lines),
    };
    (report, totals)
}

/// Executes the pipeline and returns the formatted document without writing it.
///
/// # Errors
/// Returns `Error::NoFilesFound` when discovery yields nothing, a
/// configuration error when no input path is set, and a serialization error
/// if the JSON style fails.
pub fn execute(config: &Config) -> Result<PackagedContext> {
    let first_input = config
        .input_paths
        .first()
        .ok_or(ConfigError::MissingInput)?;
    let base_path = resolve_base_path(first_input);
    info!("Packaging {} (base path)", base_path.display());

    let files = discover(config)?;
    let (report, totals) = build_report(&files, &base_path, config);

    let recent = config.discovery.recent_days.map(|window_days| RecentSection {
        changes: collect_recent_changes(&files, SystemTime::now()),
        window_days,
    });
    let formatter = formatter_for(config.output.style, !config.output.dirs_only, recent);
    let document = formatter.format(&report)?.trim().to_string();

    Ok(PackagedContext {
        document,
        files,
        totals,
    })
}

/// Executes the complete pipeline and writes the document to the configured
/// destination.
///
/// # Errors
/// In addition to the errors of [`execute`], returns `Error::OutputWrite` if
/// the destination file cannot be written.
pub fn run(config: &Config) -> Result<PackagedContext> {
    let context = execute(config)?;
    output::write_document(&context.document, &config.output_destination)?;
    Ok(context)
}
