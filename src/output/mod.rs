// src/output/mod.rs

//! Turns an assembled report into its final document and writes it out.

use crate::config::OutputStyle;
use crate::core_types::ReportData;
use crate::errors::Result;

pub mod file_block;
pub mod formatter;
mod json;
mod markdown;
mod recent;
mod summary;
pub mod writer;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use recent::{collect_recent_changes, render_recent_changes, RecentSection};
pub use summary::build_summary;
pub use writer::write_document;

/// A serialization of a [`ReportData`] into one document style.
pub trait ReportFormatter {
    /// Formats the report. Every field's content is included verbatim.
    fn format(&self, report: &ReportData) -> Result<String>;
}

/// Picks the formatter for `style`.
///
/// `include_file_contents` and `recent` only affect the Markdown style; the
/// JSON style always carries exactly the report's fields.
pub fn formatter_for(
    style: OutputStyle,
    include_file_contents: bool,
    recent: Option<RecentSection>,
) -> Box<dyn ReportFormatter> {
    match style {
        OutputStyle::Markdown => Box::new(MarkdownFormatter {
            include_file_contents,
            recent,
        }),
        OutputStyle::Json => Box::new(JsonFormatter),
    }
}
