// src/filtering/hidden.rs

use std::ffi::OsStr;
use std::path::Path;

/// Checks whether a single path segment is hidden (starts with `.`).
///
/// # Examples
/// ```
/// use repo_code_packager::filtering::is_hidden_name;
/// use std::ffi::OsStr;
///
/// assert!(is_hidden_name(OsStr::new(".env")));
/// assert!(!is_hidden_name(OsStr::new("main.rs")));
/// ```
#[inline]
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Checks whether the final component of `path` is hidden.
///
/// Paths without a final component (such as `/` or `..`) are not hidden.
#[inline]
pub fn has_hidden_file_name(path: &Path) -> bool {
    path.file_name().is_some_and(is_hidden_name)
}
