//! Header lookup and rewriting for the name column.

/// Column searched for in the input header (case-insensitive).
pub const NAME_COLUMN: &str = "name";
/// Column that replaces the name column in the output header.
pub const FIRST_NAME_COLUMN: &str = "first_name";
/// Column inserted right after `first_name` in the output header.
pub const LAST_NAME_COLUMN: &str = "last_name";

/// Location of the name column within a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameColumn {
    /// Zero-based position in the header.
    pub index: usize,
    /// Header text as it appeared in the input.
    pub header: String,
}

/// Strips a UTF-8 byte order mark from a header value.
pub fn normalize_header(value: &str) -> String {
    value.strip_prefix('\u{feff}').unwrap_or(value).to_string()
}

/// Returns true if a header value names the name column.
///
/// The comparison is exact apart from case: surrounding whitespace does not match.
pub fn is_name_header(value: &str) -> bool {
    value.to_lowercase() == NAME_COLUMN
}

/// Finds the first header matching `name`, ignoring case.
pub fn find_name_column(headers: &[String]) -> Option<NameColumn> {
    headers
        .iter()
        .position(|value| is_name_header(value))
        .map(|index| NameColumn {
            index,
            header: headers[index].clone(),
        })
}

/// Builds the output header: `first_name` at the name position, `last_name` after it.
pub fn split_headers(headers: &[String], index: usize) -> Vec<String> {
    let mut split = headers.to_vec();
    split[index] = FIRST_NAME_COLUMN.to_string();
    split.insert(index + 1, LAST_NAME_COLUMN.to_string());
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}name"), "name");
        assert_eq!(normalize_header("name"), "name");
        assert_eq!(normalize_header(" name "), " name ");
    }

    #[test]
    fn test_find_name_column_case_insensitive() {
        let found = find_name_column(&headers(&["id", "Name", "age"])).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.header, "Name");

        let found = find_name_column(&headers(&["NAME"])).unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn test_find_name_column_first_match_wins() {
        let found = find_name_column(&headers(&["id", "name", "NAME"])).unwrap();
        assert_eq!(found.index, 1);
    }

    #[test]
    fn test_find_name_column_requires_exact_text() {
        assert!(find_name_column(&headers(&["id", "full_name", " name"])).is_none());
        assert!(find_name_column(&headers(&["id", "names"])).is_none());
        assert!(find_name_column(&[]).is_none());
    }

    #[test]
    fn test_split_headers() {
        let split = split_headers(&headers(&["id", "name", "age"]), 1);
        assert_eq!(split, vec!["id", "first_name", "last_name", "age"]);

        let split = split_headers(&headers(&["name"]), 0);
        assert_eq!(split, vec!["first_name", "last_name"]);
    }
}
