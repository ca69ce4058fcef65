//! Save-time normalization

/// Serialize document lines for writing to disk.
///
/// Trailing spaces and tabs are stripped from every line and the output
/// ends with exactly one `\n`. Nothing else is changed: wrapping happens
/// while editing, never at save time.
pub fn normalize_for_save<S: AsRef<str>>(lines: &[S]) -> String {
    let mut stripped: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref().trim_end_matches([' ', '\t']))
        .collect();

    while stripped.last().is_some_and(|line| line.is_empty()) {
        stripped.pop();
    }

    let mut out = stripped.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_text(text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        normalize_for_save(&lines)
    }

    #[test]
    fn test_strips_trailing_whitespace_and_adds_newline() {
        assert_eq!(normalize_text("hello   \t"), "hello\n");
    }

    #[test]
    fn test_existing_newline_is_not_doubled() {
        assert_eq!(normalize_text("hello\n"), "hello\n");
    }

    #[test]
    fn test_trailing_blank_lines_collapse() {
        assert_eq!(normalize_text("hello\n\n  \n\t\n"), "hello\n");
    }

    #[test]
    fn test_whitespace_only_lines_become_empty() {
        assert_eq!(
            normalize_text("Title  \n   \nBody\t\nmore "),
            "Title\n\nBody\nmore\n"
        );
    }

    #[test]
    fn test_leading_whitespace_is_kept() {
        assert_eq!(normalize_text("Title\n\n  - item  "), "Title\n\n  - item\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(normalize_text(""), "\n");
    }

    #[test]
    fn test_carriage_returns_are_not_touched() {
        assert_eq!(normalize_text("Title\r\nBody\r"), "Title\r\nBody\r\n");
    }
}
