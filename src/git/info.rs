// src/git/info.rs

use crate::constants::NOT_A_GIT_REPOSITORY;
use std::fmt;
use std::path::Path;

/// Metadata of the commit at `HEAD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    /// Full commit hash.
    pub commit: String,
    /// Current branch name, or `HEAD` when detached.
    pub branch: String,
    /// `Name <email>` of the commit author.
    pub author: String,
    /// Author date in git's default format.
    pub date: String,
}

impl fmt::Display for GitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- Commit: {}\n- Branch: {}\n- Author: {}\n- Date: {}",
            self.commit, self.branch, self.author, self.date
        )
    }
}

/// Looks up the repository containing `path` and reads its `HEAD` commit.
///
/// Returns `None` when `path` is not inside a repository or `HEAD` does not
/// point at a commit.
#[cfg(feature = "git")]
pub fn read_git_info(path: &Path) -> Option<GitInfo> {
    match read_head(path) {
        Ok(info) => Some(info),
        Err(e) => {
            log::debug!("No git metadata for {}: {}", path.display(), e.message());
            None
        }
    }
}

/// Without the `git` feature there is never any metadata.
#[cfg(not(feature = "git"))]
pub fn read_git_info(path: &Path) -> Option<GitInfo> {
    log::debug!(
        "Built without git support; skipping metadata for {}",
        path.display()
    );
    None
}

#[cfg(feature = "git")]
fn read_head(path: &Path) -> Result<GitInfo, git2::Error> {
    let repo = git2::Repository::discover(path)?;
    let head = repo.head()?;
    let commit = head.peel_to_commit()?;

    let branch = if repo.head_detached()? {
        "HEAD".to_string()
    } else {
        head.shorthand().unwrap_or("HEAD").to_string()
    };

    let signature = commit.author();
    let author = format!(
        "{} <{}>",
        String::from_utf8_lossy(signature.name_bytes()),
        String::from_utf8_lossy(signature.email_bytes())
    );

    Ok(GitInfo {
        commit: commit.id().to_string(),
        branch,
        author,
        date: format_git_date(signature.when().seconds(), signature.when().offset_minutes()),
    })
}

/// Formats a timestamp like `git log` does by default, e.g.
/// `Mon Jan 1 12:00:00 2024 +0000`.
#[cfg(feature = "git")]
fn format_git_date(seconds: i64, offset_minutes: i32) -> String {
    use chrono::{DateTime, FixedOffset, Utc};

    let offset = FixedOffset::east_opt(offset_minutes * 60).or_else(|| FixedOffset::east_opt(0));
    match (DateTime::<Utc>::from_timestamp(seconds, 0), offset) {
        (Some(utc), Some(offset)) => utc
            .with_timezone(&offset)
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string(),
        _ => seconds.to_string(),
    }
}

/// Renders the git section body for `path`, falling back to the sentinel.
pub fn git_info_text(path: &Path) -> String {
    read_git_info(path)
        .map(|info| info.to_string())
        .unwrap_or_else(|| NOT_A_GIT_REPOSITORY.to_string())
}
