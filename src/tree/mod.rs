//! Builds and renders the directory-structure tree.
//!
//! A [`PathTree`] is built once from the file set, rendered to text with
//! box-drawing glyphs, and discarded.

use std::path::Path;

mod node;
mod render;

pub use node::{Node, PathTree};
pub use render::render_path_tree;

/// Renders the file set as a box-drawing tree relative to `base_path`.
///
/// Entries are sorted by name at every level (directories and files together),
/// so the same input always renders the same text. An empty file set renders
/// as an empty string.
///
/// # Examples
///
/// ```
/// use repo_code_packager::render_tree;
/// use std::path::{Path, PathBuf};
///
/// let files = vec![
///     PathBuf::from("/repo/subdir/nested.txt"),
///     PathBuf::from("/repo/root.txt"),
/// ];
/// let tree = render_tree(&files, Path::new("/repo"));
/// assert_eq!(tree, "├── root.txt\n└── subdir\n    └── nested.txt");
/// ```
pub fn render_tree<P: AsRef<Path>>(files: &[P], base_path: &Path) -> String {
    let tree = PathTree::from_files(files, base_path);
    render_path_tree(&tree)
}
