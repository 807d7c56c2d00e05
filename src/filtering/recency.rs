// src/filtering/recency.rs

use crate::constants::SECONDS_PER_DAY;
use log::trace;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Returns how long ago `path` was last modified, relative to `now`.
///
/// Returns `None` when the file's metadata cannot be read (e.g. it was deleted).
/// A modification time in the future counts as zero age.
pub fn modification_age(path: &Path, now: SystemTime) -> Option<Duration> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    Some(now.duration_since(modified).unwrap_or(Duration::ZERO))
}

/// Checks whether `path` was modified within the last `max_age_days` days.
///
/// The boundary is inclusive: a file exactly `max_age_days` old is recent.
/// A path that no longer exists is simply not recent.
///
/// # Examples
/// ```
/// use repo_code_packager::filtering::is_recently_modified;
/// use std::path::Path;
///
/// assert!(!is_recently_modified(Path::new("definitely_missing_file.txt"), 7));
/// ```
pub fn is_recently_modified(path: &Path, max_age_days: u64) -> bool {
    is_recently_modified_at(path, max_age_days, SystemTime::now())
}

/// Same as [`is_recently_modified`], measured against an explicit `now`.
pub fn is_recently_modified_at(path: &Path, max_age_days: u64, now: SystemTime) -> bool {
    match modification_age(path, now) {
        Some(age) => {
            let threshold = Duration::from_secs(max_age_days.saturating_mul(SECONDS_PER_DAY));
            trace!("{} modified {:?} ago", path.display(), age);
            age <= threshold
        }
        None => false,
    }
}

/// Whole days since `path` was last modified, rounded down.
pub fn days_since_modified(path: &Path, now: SystemTime) -> Option<u64> {
    modification_age(path, now).map(|age| age.as_secs() / SECONDS_PER_DAY)
}
