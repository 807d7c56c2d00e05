// src/tree/node.rs

use crate::processing::relative_display_path;
use log::warn;
use std::collections::BTreeMap;
use std::path::{Component, Path};

/// One entry in a [`PathTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A file.
    Leaf,
    /// A directory and its entries.
    Directory(PathTree),
}

/// A name-sorted hierarchy of path segments.
///
/// Keys are kept in a `BTreeMap`, which gives the byte-wise (and therefore
/// code-point-wise) name order the renderer relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    entries: BTreeMap<String, Node>,
}

impl PathTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from absolute file paths, each made relative to `base_path`.
    pub fn from_files<P: AsRef<Path>>(files: &[P], base_path: &Path) -> Self {
        let mut tree = Self::new();
        for file in files {
            let relative = relative_display_path(file.as_ref(), base_path);
            let segments: Vec<String> = relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                    Component::ParentDir => Some("..".to_string()),
                    Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
                })
                .collect();
            tree.insert(&segments);
        }
        tree
    }

    /// Inserts one file given as path segments. The last segment is the file.
    ///
    /// An existing entry never changes kind: inserting a file where a directory
    /// of the same name exists keeps the directory, and a path that would need
    /// to descend through an existing file is skipped.
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S]) {
        let Some((file_name, dirs)) = segments.split_last() else {
            return;
        };

        let mut level = self;
        for dir in dirs {
            let node = level
                .entries
                .entry(dir.as_ref().to_string())
                .or_insert_with(|| Node::Directory(PathTree::new()));
            match node {
                Node::Directory(subtree) => level = subtree,
                Node::Leaf => {
                    warn!(
                        "Cannot place '{}' under '{}': a file with that name is already in the tree.",
                        file_name.as_ref(),
                        dir.as_ref()
                    );
                    return;
                }
            }
        }
        level
            .entries
            .entry(file_name.as_ref().to_string())
            .or_insert(Node::Leaf);
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry at this level by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(name)
    }
}
