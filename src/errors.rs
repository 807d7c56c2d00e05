//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can terminate a run (configuration, empty result, output write), offering
//! more context than generic I/O or `anyhow` errors. Failures that the pipeline
//! absorbs (a single unreadable file, git or language lookups) never surface here.

use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// All of these are fatal and are reported before any file discovery begins.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The defaults file could not be read, or an explicitly named one is missing.
    #[error("Cannot read config file \"{path}\": {source}")]
    Read {
        /// Path of the defaults file.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The defaults file is not valid TOML, or holds values of the wrong type.
    #[error("Cannot parse config file \"{path}\" as TOML: {message}")]
    Parse {
        /// Path of the defaults file.
        path: String,
        /// The parser's description of the problem.
        message: String,
    },

    /// An option carries a value that cannot be used.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// No input path was supplied.
    #[error("At least one input path is required.")]
    MissingInput,
}

/// Application-specific errors used throughout `repo-code-packager`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration. Always fatal.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No files survived discovery and filtering.
    #[error("No files found in the specified paths.")]
    NoFilesFound,

    /// The finished document could not be written to its destination file.
    #[error("Error writing to file {path}: {source}")]
    OutputWrite {
        /// The destination path.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized in the structured-data style.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// The process exit status the binary uses for this error.
    ///
    /// Configuration errors and write errors get their own statuses so scripts
    /// can tell them apart from an empty result.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::NoFilesFound => 1,
            Error::OutputWrite { .. } => 3,
            Error::Io { .. } | Error::Serialization(_) => 1,
        }
    }
}

/// A specialized `Result` type for this crate's operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = io_error_with_path(source_error, &path);

        match app_error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_exit_codes_are_distinct_for_fatal_kinds() {
        let config = Error::from(ConfigError::MissingInput);
        let empty = Error::NoFilesFound;
        let write = Error::OutputWrite {
            path: "out.md".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(config.exit_code(), 2);
        assert_eq!(empty.exit_code(), 1);
        assert_eq!(write.exit_code(), 3);
    }

    #[test]
    fn test_parse_error_message_names_the_file() {
        let err = Error::from(ConfigError::Parse {
            path: "bad.toml".to_string(),
            message: "expected `=`".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("Cannot parse config file \"bad.toml\" as TOML"));
        assert!(msg.contains("expected `=`"));
    }
}
