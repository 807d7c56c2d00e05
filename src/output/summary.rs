// src/output/summary.rs

/// Builds the two-line summary block.
///
/// The first line reports how many files are in the report and the second
/// reports the line total from content aggregation.
///
/// # Examples
///
/// ```
/// use repo_code_packager::output::build_summary;
///
/// let files = ["a.rs", "b.rs"];
/// assert_eq!(build_summary(&files, 12), "- Total files: 2\n- Total lines: 12");
/// ```
pub fn build_summary<P>(files: &[P], total_lines: usize) -> String {
    format!(
        "- Total files: {}\n- Total lines: {}",
        files.len(),
        total_lines
    )
}
