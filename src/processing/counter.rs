// src/processing/counter.rs

/// Counts lines the way the report totals do: newline characters plus one.
///
/// This means an empty body counts as one line, and a body ending in a
/// newline counts the empty line after it.
///
/// # Examples
///
/// ```
/// use repo_code_packager::processing::count_lines;
///
/// assert_eq!(count_lines(""), 1);
/// assert_eq!(count_lines("one\ntwo"), 2);
/// assert_eq!(count_lines("one\ntwo\n"), 3);
/// ```
#[inline]
pub fn count_lines(content: &str) -> usize {
    content.bytes().filter(|&b| b == b'\n').count() + 1
}
