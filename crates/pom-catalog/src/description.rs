//! Free-text normalization for POM descriptions.

/// Collapses a multi-line, indented description into a single line.
///
/// Each line is trimmed and the non-blank lines are joined with one space.
/// Whitespace inside a line is kept as written.
pub fn clean_description(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
