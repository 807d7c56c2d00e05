// src/processing/truncate.rs

use crate::constants::{MAX_FILE_SIZE_BYTES, MAX_FILE_SIZE_KB};

/// Marker appended to truncated bodies.
pub fn truncation_marker() -> String {
    format!(
        "\n... (file truncated due to size > {}KB)",
        MAX_FILE_SIZE_KB
    )
}

/// Truncates `content` when the file's on-disk size exceeds the ceiling.
///
/// The decision uses `size_on_disk`; the cut keeps the first
/// `MAX_FILE_SIZE_BYTES` characters of `content` and appends the marker.
/// Content of a file at or under the ceiling is returned untouched.
pub fn truncate_oversized(content: String, size_on_disk: u64) -> String {
    if size_on_disk <= MAX_FILE_SIZE_BYTES {
        return content;
    }
    let limit = usize::try_from(MAX_FILE_SIZE_BYTES).unwrap_or(usize::MAX);
    let mut truncated = match content.char_indices().nth(limit) {
        Some((byte_idx, _)) => content[..byte_idx].to_string(),
        None => content,
    };
    truncated.push_str(&truncation_marker());
    truncated
}
