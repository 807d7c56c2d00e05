// src/constants.rs

/// Title line at the top of the Markdown document.
pub const DOCUMENT_TITLE: &str = "# Repository Context";

/// Files larger than this many bytes on disk are truncated to this many characters.
pub const MAX_FILE_SIZE_BYTES: u64 = 16 * 1024;

/// Ceiling expressed in KiB, as shown in the truncation marker.
pub const MAX_FILE_SIZE_KB: u64 = MAX_FILE_SIZE_BYTES / 1024;

/// Directory names pruned during discovery even without a defaults file.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["venv"];

/// Recency window used by `--recent`.
pub const DEFAULT_RECENT_DAYS: u64 = 7;

/// Seconds in one day, for modification-age arithmetic.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Name of the optional defaults file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".repo-code-packager-config.toml";

/// Git section body when the base path is not inside a repository.
pub const NOT_A_GIT_REPOSITORY: &str = "Not a git repository";

/// Rough characters-per-token ratio used by `--tokens`.
pub const CHARS_PER_TOKEN: usize = 4;
