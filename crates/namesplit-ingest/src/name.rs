//! Full-name splitting.

/// Splits a full name into `(first, last)` on the first space.
///
/// Leading and trailing whitespace, including the information separators
/// U+001C..U+001F, is trimmed before splitting. Everything
/// after the first space goes to `last` verbatim, so interior runs of spaces
/// are kept. Only U+0020 is a split point; tabs and other whitespace are not.
///
/// ```
/// use namesplit_ingest::split_name;
///
/// assert_eq!(split_name("Jane Doe"), ("Jane", "Doe"));
/// assert_eq!(split_name("  Alice   Bob  "), ("Alice", "  Bob"));
/// assert_eq!(split_name("Madonna"), ("Madonna", ""));
/// assert_eq!(split_name("   "), ("", ""));
/// ```
pub fn split_name(name: &str) -> (&str, &str) {
    let trimmed = name.trim_matches(is_trimmed);
    if trimmed.is_empty() {
        return ("", "");
    }
    trimmed.split_once(' ').unwrap_or((trimmed, ""))
}

fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
