//! Defines core data structures used throughout the application pipeline.
//!
//! `ContentBlock` and `Totals` live only inside one aggregation run,
//! `Aggregation` carries its result out, and `ReportData` is the immutable
//! record handed to exactly one formatter call.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One processed file, ready to be rendered as a fenced block.
///
/// # Examples
///
/// ```
/// use repo_code_packager::core_types::ContentBlock;
/// use std::path::PathBuf;
///
/// let block = ContentBlock {
///     relative_path: PathBuf::from("src/main.rs"),
///     body: "fn main() {}".to_string(),
///     language: "rust".to_string(),
///     size: 12,
/// };
///
/// assert_eq!(block.relative_path.to_str(), Some("src/main.rs"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBlock {
    /// The path relative to the base path, used in the block header.
    pub relative_path: PathBuf,
    /// The text body, possibly line-numbered and/or truncated.
    pub body: String,
    /// Best-guess language tag for the code fence. Empty when nothing matched.
    pub language: String,
    /// The file's size in bytes when it was opened.
    pub size: u64,
}

/// Running line and character counts for one aggregation run.
///
/// Only ever increased, once per successfully processed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of `newlines + 1` over every emitted body.
    pub lines: usize,
    /// Sum of the character length of every emitted body.
    pub characters: usize,
}

impl Totals {
    /// Folds one emitted body into the totals.
    pub fn record(&mut self, body: &str) {
        self.lines += crate::processing::count_lines(body);
        self.characters += body.chars().count();
    }
}

/// The output of the content aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// All content blocks rendered and joined by blank lines.
    pub body: String,
    /// Accumulated counts.
    pub totals: Totals,
    /// Number of files that were read successfully.
    pub files_processed: usize,
}

/// The fully assembled sections of one report.
///
/// Field order here is the key order of the structured-data style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportData {
    /// Absolute base path every display path is relative to.
    pub base_path: String,
    /// Rendered git metadata, or the "not a git repository" sentinel.
    pub git_info: String,
    /// Rendered directory tree.
    pub structure_tree: String,
    /// Rendered content blocks. Empty in directory-only mode.
    pub file_contents: String,
    /// Rendered summary block.
    pub summary: String,
}

/// One entry of the "recent changes" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentChange {
    /// The file's base name.
    pub name: String,
    /// Whole days since the last modification.
    pub days_ago: u64,
}

/// The result of a full run, before or after writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedContext {
    /// The formatted document, trimmed of leading/trailing whitespace.
    pub document: String,
    /// The files that made it into the report.
    pub files: Vec<PathBuf>,
    /// Totals from content aggregation. Zero in directory-only mode.
    pub totals: Totals,
}

impl PackagedContext {
    /// Rough token estimate: total characters divided by four.
    pub fn estimated_tokens(&self) -> usize {
        self.totals.characters / crate::constants::CHARS_PER_TOKEN
    }
}
