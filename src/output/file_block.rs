// src/output/file_block.rs

use crate::core_types::ContentBlock;
use crate::output::formatter::format_path_for_display;
use log::trace;

/// Renders a single file's header and fenced content block.
///
/// The fence opens with the block's language tag, which may be empty.
pub fn render_content_block(block: &ContentBlock) -> String {
    let header_path = format_path_for_display(&block.relative_path);
    trace!("Rendering block for '{}'", header_path);
    format!(
        "### File: {}\n```{}\n{}\n```",
        header_path, block.language, block.body
    )
}
