// src/git/mod.rs
//! Reads metadata about the git repository enclosing the base path.
//!
//! Lookup failures never surface as errors: a missing repository, an unborn
//! branch or a build without the `git` feature all collapse to the
//! "not a git repository" sentinel when rendered.

mod info;

pub use info::{git_info_text, read_git_info, GitInfo};
