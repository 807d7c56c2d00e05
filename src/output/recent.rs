// src/output/recent.rs

//! Collects and renders the "recent changes" section.

use crate::core_types::RecentChange;
use crate::filtering::days_since_modified;
use log::warn;
use std::path::PathBuf;
use std::time::SystemTime;

/// The data behind the "recent changes" section of the Markdown style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSection {
    /// One entry per reported file.
    pub changes: Vec<RecentChange>,
    /// Length of the recency window, shown when `changes` is empty.
    pub window_days: u64,
}

impl RecentSection {
    /// Renders the section body.
    pub fn render(&self) -> String {
        render_recent_changes(&self.changes, self.window_days)
    }
}

/// Measures how long ago each file was modified, relative to `now`.
///
/// Files whose modification time can no longer be read are left out.
pub fn collect_recent_changes(files: &[PathBuf], now: SystemTime) -> Vec<RecentChange> {
    files
        .iter()
        .filter_map(|path| {
            let Some(days_ago) = days_since_modified(path, now) else {
                warn!(
                    "Cannot read modification time of {}; leaving it out of recent changes.",
                    path.display()
                );
                return None;
            };
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Some(RecentChange { name, days_ago })
        })
        .collect()
}

/// Renders the section body: one line per change, or a fixed sentence when
/// the window held no files.
pub fn render_recent_changes(changes: &[RecentChange], window_days: u64) -> String {
    if changes.is_empty() {
        return format!("No files modified in the last {} days.", window_days);
    }
    changes
        .iter()
        .map(|c| format!("- {} (modified {} days ago)", c.name, c.days_ago))
        .collect::<Vec<_>>()
        .join("\n")
}
