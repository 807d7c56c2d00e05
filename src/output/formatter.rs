// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use std::path::Path;

/// Formats a path for display in block headers and the tree.
///
/// Path separators are normalized to `/` so documents read the same on every
/// platform.
///
/// # Examples
/// ```
/// use repo_code_packager::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// assert_eq!(format_path_for_display(Path::new("src/main.rs")), "src/main.rs");
/// ```
pub fn format_path_for_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
