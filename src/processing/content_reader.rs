// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The decoded text of a file and its on-disk size when it was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileText {
    pub text: String,
    pub size: u64,
}

/// Reads a file as text, replacing invalid UTF-8 sequences instead of failing.
///
/// `\r\n` and lone `\r` line endings are converted to `\n`. `size` stays the
/// byte length on disk. The handle is dropped before returning, on success and on error alike.
pub fn read_file_lossy(path: &Path) -> Result<FileText> {
    let mut file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
    let size = file
        .metadata()
        .map_err(|e| io_error_with_path(e, path))?
        .len();
    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    file.read_to_end(&mut bytes)
        .map_err(|e| io_error_with_path(e, path))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
    Ok(FileText {
        text: normalize_line_endings(text),
        size,
    })
}

fn normalize_line_endings(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
