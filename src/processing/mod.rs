//! Handles the content aggregation stage of the pipeline.
//!
//! This module reads each discovered file, optionally numbers its lines,
//! truncates oversized content, tags it with a best-guess language and folds
//! it into running totals. A file that cannot be read is logged and skipped;
//! it never aborts the run.

use crate::config::ProcessingConfig;
use crate::core_types::{Aggregation, ContentBlock, Totals};
use crate::output::file_block::render_content_block;
use log::{debug, error};
use std::path::{Path, PathBuf};

mod content_reader;
mod counter;
mod language;
mod line_numbers;
mod truncate;

pub use content_reader::{read_file_lossy, FileText};
pub use counter::count_lines;
pub use language::guess_language;
pub use line_numbers::number_lines;
pub use truncate::{truncate_oversized, truncation_marker};

/// Computes the path of `path` relative to `base`, with `..` segments when
/// `path` lies outside `base`. Falls back to `path` itself when no relative
/// form exists.
pub fn relative_display_path(path: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Reads one file and turns it into a content block.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn build_content_block(
    path: &Path,
    base_path: &Path,
    options: &ProcessingConfig,
) -> crate::errors::Result<ContentBlock> {
    let FileText { text, size } = read_file_lossy(path)?;
    let language = guess_language(path, &text).unwrap_or_default().to_string();

    let numbered = if options.line_numbers {
        number_lines(&text)
    } else {
        text
    };
    let body = truncate_oversized(numbered, size);

    Ok(ContentBlock {
        relative_path: relative_display_path(path, base_path),
        body,
        language,
        size,
    })
}

/// Reads every file and concatenates the rendered content blocks.
///
/// Paths are processed in sorted order. Blocks are joined by a blank line and
/// totals count only the files that were read successfully.
#[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
pub fn aggregate_contents(
    files: &[PathBuf],
    base_path: &Path,
    options: &ProcessingConfig,
) -> Aggregation {
    let mut sorted: Vec<&PathBuf> = files.iter().collect();
    sorted.sort();

    let mut totals = Totals::default();
    let mut rendered = Vec::with_capacity(sorted.len());

    for path in sorted {
        match build_content_block(path, base_path, options) {
            Ok(block) => {
                debug!(
                    "Aggregated {} ({} bytes, language '{}')",
                    block.relative_path.display(),
                    block.size,
                    block.language
                );
                totals.record(&block.body);
                rendered.push(render_content_block(&block));
            }
            Err(e) => {
                error!("Error reading file {}: {}", path.display(), e);
            }
        }
    }

    Aggregation {
        files_processed: rendered.len(),
        body: rendered.join("\n\n"),
        totals,
    }
}
