// src/processing/line_numbers.rs

/// Prefixes every line with its 1-based number and `": "`.
///
/// Lines are split on `\n` (a trailing `\r` is dropped) and rejoined with
/// `\n`, so a trailing newline in the input does not produce an extra
/// numbered line. Empty input stays empty.
///
/// # Examples
///
/// ```
/// use repo_code_packager::processing::number_lines;
///
/// assert_eq!(number_lines("fn main() {\n}\n"), "1: fn main() {\n2: }");
/// ```
pub fn number_lines(content: &str) -> String {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{}: {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
