//! Discovers the files to package from the input paths.
//!
//! The result is a flat list of absolute paths. Order follows the input paths
//! and, within a directory, a name-sorted walk; consumers that need a canonical
//! order still sort explicitly.

use crate::config::absolute_path;
use crate::filtering::has_hidden_file_name;
use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Discovers all regular files under the given input paths.
///
/// - A path naming a regular file is included unless its base name is hidden.
/// - A path naming a directory is walked recursively, pruning hidden
///   subdirectories and any subdirectory whose name is in `excluded_dirs`,
///   and skipping hidden files.
/// - A path that names neither is skipped without error.
///
/// Overlapping inputs never yield the same file twice.
///
/// # Examples
///
/// ```
/// use repo_code_packager::discover_files;
/// use std::collections::BTreeSet;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::write(temp.path().join("a.txt"), "a").unwrap();
/// fs::write(temp.path().join(".hidden.txt"), "h").unwrap();
///
/// let files = discover_files(&[temp.path().to_str().unwrap()], &BTreeSet::new());
/// assert_eq!(files, vec![temp.path().join("a.txt")]);
/// ```
pub fn discover_files<S: AsRef<str>>(paths: &[S], excluded_dirs: &BTreeSet<String>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for input in paths {
        let abs = absolute_path(Path::new(input.as_ref()));
        if abs.is_file() {
            if has_hidden_file_name(&abs) {
                debug!("Skipping hidden input file: {}", abs.display());
                continue;
            }
            if seen.insert(abs.clone()) {
                files.push(abs);
            }
        } else if abs.is_dir() {
            for path in build_walker(&abs, excluded_dirs).filter_map(process_direntry) {
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        } else {
            debug!(
                "Input path is neither a file nor a directory, skipping: {}",
                abs.display()
            );
        }
    }

    debug!("Discovery complete. {} files found.", files.len());
    files
}
