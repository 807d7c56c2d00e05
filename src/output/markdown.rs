// src/output/markdown.rs

use super::recent::RecentSection;
use super::ReportFormatter;
use crate::constants::DOCUMENT_TITLE;
use crate::core_types::ReportData;
use crate::errors::Result;

/// Renders a report as sectioned Markdown.
///
/// Sections appear in a fixed order: location, git info, structure, file
/// contents (unless disabled), recent changes (only when present) and the
/// summary, each separated by a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFormatter {
    /// Emit the `## File Contents` section.
    pub include_file_contents: bool,
    /// Emit a `## Recent Changes` section with this data.
    pub recent: Option<RecentSection>,
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self {
            include_file_contents: true,
            recent: None,
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ReportData) -> Result<String> {
        let mut parts = vec![
            format!(
                "{}\n\n## File System Location\n\n{}",
                DOCUMENT_TITLE, report.base_path
            ),
            format!("## Git Info\n\n{}", report.git_info),
            format!("## Structure\n\n{}", report.structure_tree),
        ];
        if self.include_file_contents {
            parts.push(format!("## File Contents\n\n{}", report.file_contents));
        }
        if let Some(recent) = &self.recent {
            parts.push(format!("## Recent Changes\n\n{}", recent.render()));
        }
        parts.push(format!("## Summary\n\n{}", report.summary));
        Ok(parts.join("\n\n"))
    }
}
