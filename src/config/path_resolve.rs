// src/config/path_resolve.rs

use std::env;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against the current directory without touching the filesystem.
///
/// The result is normalized lexically: `.` segments and trailing separators
/// are dropped and `..` removes the preceding segment. Symlinks are not
/// resolved and the path does not need to exist, so input paths that name
/// nothing can still be reported and then skipped.
///
/// # Examples
/// ```
/// use repo_code_packager::config::absolute_path;
/// use std::path::{Path, PathBuf};
///
/// # #[cfg(unix)]
/// assert_eq!(absolute_path(Path::new("/work/p/../p/./src/")), PathBuf::from("/work/p/src"));
/// ```
pub fn absolute_path(path: &Path) -> PathBuf {
    normalize_lexically(&joined_with_cwd(path))
}

fn joined_with_cwd(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::path::absolute(path) {
        Ok(abs) => abs,
        Err(e) => {
            log::warn!(
                "Could not make '{}' absolute ({}); joining with the current directory.",
                path.display(),
                e
            );
            env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    }
}

/// Folds `.` and `..` segments out of an absolute path.
///
/// `..` at the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component.as_os_str())
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_)) | None
                ) {
                    normalized.pop();
                }
            }
        }
    }
    normalized
}

/// Determines the base path that every display path is relative to.
///
/// This is the first input path made absolute, or its parent directory when it
/// names a regular file.
pub fn resolve_base_path(first_input: &str) -> PathBuf {
    let abs = absolute_path(Path::new(first_input));
    if abs.is_file() {
        abs.parent().map(Path::to_path_buf).unwrap_or(abs)
    } else {
        abs
    }
}
