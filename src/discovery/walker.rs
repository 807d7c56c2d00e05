// src/discovery/walker.rs

use crate::filtering::is_hidden_name;
use ignore::WalkBuilder;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

/// Configures and builds the `ignore::Walk` for one input directory.
///
/// VCS ignore files are not consulted; the only pruning rules are hidden
/// names and the `excluded_dirs` set. The root itself is never pruned, so a
/// hidden directory named explicitly on the command line is still walked.
pub(super) fn build_walker(root: &Path, excluded_dirs: &BTreeSet<String>) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);

    walker_builder.standard_filters(false);
    walker_builder.follow_links(false);
    walker_builder.sort_by_file_name(|a, b| a.cmp(b));
    debug!(
        "Configuring WalkBuilder for {}: standard_filters disabled, {} excluded dir names.",
        root.display(),
        excluded_dirs.len()
    );

    let excluded = excluded_dirs.clone();
    walker_builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name();
        if is_hidden_name(name) {
            debug!("Pruning hidden entry: {:?}", entry.path());
            return false;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir && excluded.contains(name.to_string_lossy().as_ref()) {
            debug!("Pruning excluded directory: {:?}", entry.path());
            return false;
        }
        true
    });

    walker_builder.build()
}
