// src/output/writer.rs

//! Writes the finished document to its destination.

use crate::config::OutputDestination;
use crate::errors::{Error, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `document` to stdout, followed by a newline, or to a file exactly
/// as given.
///
/// # Errors
/// Returns `Error::OutputWrite` if the destination file cannot be created or
/// written. A failure writing to stdout is reported as `Error::Io`.
pub fn write_document(document: &str, destination: &OutputDestination) -> Result<()> {
    match destination {
        OutputDestination::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", document)
                .and_then(|()| handle.flush())
                .map_err(|e| crate::errors::io_error_with_path(e, "<stdout>"))
        }
        OutputDestination::File(path) => write_file(path, document),
    }
}

fn write_file(path: &Path, document: &str) -> Result<()> {
    let to_error = |source: io::Error| Error::OutputWrite {
        path: path.display().to_string(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(document.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    log::debug!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}
