// src/tree/render.rs

use super::{Node, PathTree};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";

/// Serializes a [`PathTree`] into box-drawing lines joined by `\n`.
///
/// There is no trailing newline, and an empty tree renders as `""`.
pub fn render_path_tree(tree: &PathTree) -> String {
    let mut lines = Vec::new();
    render_level(tree, "", &mut lines);
    lines.join("\n")
}

fn render_level(tree: &PathTree, prefix: &str, lines: &mut Vec<String>) {
    let count = tree.len();
    for (i, (name, node)) in tree.iter().enumerate() {
        let is_last = i + 1 == count;
        let glyph = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{prefix}{glyph}{name}"));
        if let Node::Directory(subtree) = node {
            let connector = if is_last { BLANK } else { CONTINUATION };
            render_level(subtree, &format!("{prefix}{connector}"), lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::render_tree;
    use std::path::{Path, PathBuf};

    fn abs(paths: &[&str]) -> Vec<PathBuf> {
        paths.iter().map(|p| Path::new("/base").join(p)).collect()
    }

    #[test]
    fn test_empty_file_set_renders_empty_string() {
        let files: Vec<PathBuf> = Vec::new();
        assert_eq!(render_tree(&files, Path::new("/base")), "");
    }

    #[test]
    fn test_single_file() {
        assert_eq!(render_tree(&abs(&["test.txt"]), Path::new("/base")), "└── test.txt");
    }

    #[test]
    fn test_nested_structure_sorted_alphabetically() {
        let tree = render_tree(&abs(&["subdir/nested.txt", "root.txt"]), Path::new("/base"));
        assert_eq!(tree, "├── root.txt\n└── subdir\n    └── nested.txt");
    }

    #[test]
    fn test_directories_and_files_sort_together() {
        let tree = render_tree(
            &abs(&["b.txt", "a/inner.txt", "c/deep/x.rs"]),
            Path::new("/base"),
        );
        let expected = "\
├── a
│   └── inner.txt
├── b.txt
└── c
    └── deep
        └── x.rs";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_continuation_prefix_under_non_last_directory() {
        let tree = render_tree(
            &abs(&["src/main.rs", "src/lib.rs", "tests/it.rs"]),
            Path::new("/base"),
        );
        let expected = "\
├── src
│   ├── lib.rs
│   └── main.rs
└── tests
    └── it.rs";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let files = abs(&["z.txt", "m/n.txt", "a.txt", "m/a.txt"]);
        let mut reversed = files.clone();
        reversed.reverse();
        let first = render_tree(&files, Path::new("/base"));
        assert_eq!(first, render_tree(&files, Path::new("/base")));
        assert_eq!(first, render_tree(&reversed, Path::new("/base")));
    }

    #[test]
    fn test_files_outside_base_use_parent_segments() {
        let files = vec![PathBuf::from("/other/x.txt")];
        let tree = render_tree(&files, Path::new("/base"));
        assert_eq!(tree, "└── ..\n    └── other\n        └── x.txt");
    }
}
