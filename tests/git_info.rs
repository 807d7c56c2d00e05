#![cfg(feature = "git")]

mod common;

use assert_cmd::prelude::*;
use common::{create_file, packager_cmd};
use git2::{Repository, Signature, Time};
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn commit_all(repo: &Repository, files: &[&str]) -> Result<git2::Oid, Box<dyn std::error::Error>> {
    let mut index = repo.index()?;
    for file in files {
        index.add_path(Path::new(file))?;
    }
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;
    let sig = Signature::new("Ada Lovelace", "ada@example.com", &Time::new(1_704_110_400, 0))?;
    Ok(repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])?)
}

#[test]
fn test_git_section_reports_head_commit() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let repo = Repository::init(temp.path())?;
    create_file(temp.path(), "src/lib.rs", "pub fn f() {}")?;
    let oid = commit_all(&repo, &["src/lib.rs"])?;
    let branch = repo.head()?.shorthand().unwrap_or_default().to_string();

    packager_cmd()
        .arg("src")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "## Git Info\n\n- Commit: {}\n- Branch: {}\n- Author: Ada Lovelace <ada@example.com>\n- Date: Mon Jan 1 12:00:00 2024 +0000",
            oid, branch
        )))
        .stdout(predicate::str::contains(".git").not());
    Ok(())
}
