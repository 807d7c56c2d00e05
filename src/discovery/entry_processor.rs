// src/discovery/entry_processor.rs

use ignore::DirEntry;
use log::{trace, warn};
use std::fs;
use std::path::PathBuf;

/// Processes a single directory entry from the walk.
///
/// Hidden names and excluded directories were already pruned by the walker,
/// so all that is left is to keep regular files. Symlinks are followed for
/// this check only: a link to a file is kept, a dangling link is dropped.
///
/// Returns `Some(path)` for a file that should be included, `None` otherwise.
pub(super) fn process_direntry(entry_result: Result<DirEntry, ignore::Error>) -> Option<PathBuf> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    let path = entry.path();
    trace!("Processing entry: {}", path.display());

    let metadata = if entry.path_is_symlink() {
        fs::metadata(path)
    } else {
        entry.metadata().map_err(|e| {
            e.into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walker metadata error"))
        })
    };

    match metadata {
        Ok(md) if md.is_file() => Some(path.to_path_buf()),
        Ok(_) => {
            trace!("Skipping non-file entry: {}", path.display());
            None
        }
        Err(e) => {
            warn!(
                "Skipping entry '{}' due to metadata error: {}",
                path.display(),
                e
            );
            None
        }
    }
}
