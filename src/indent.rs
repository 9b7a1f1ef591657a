//! Indentation unit shared by the scanner and the docstring parser.

/// Number of leading whitespace characters per indent level.
pub const INDENT_UNIT: usize = 4;

/// Count leading whitespace characters, or `None` for a blank line.
pub fn indent_width(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    Some(line[..line.len() - trimmed.len()].chars().count())
}

/// Discrete indent level of a line: `floor(leading / INDENT_UNIT)`.
pub fn indent_level(line: &str) -> Option<usize> {
    indent_width(line).map(|w| w / INDENT_UNIT)
}

/// Remove up to `width` leading whitespace characters.
pub fn strip_indent(line: &str, width: usize) -> &str {
    let mut start = 0;
    for (n, (i, c)) in line.char_indices().enumerate() {
        if n == width || !c.is_whitespace() {
            return &line[i..];
        }
        start = i + c.len_utf8();
    }
    &line[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_has_no_level() {
        assert_eq!(indent_level(""), None);
        assert_eq!(indent_level("      "), None);
        assert_eq!(indent_level("\t \t"), None);
    }

    #[test]
    fn level_floors_partial_units() {
        assert_eq!(indent_level("x"), Some(0));
        assert_eq!(indent_level("   x"), Some(0));
        assert_eq!(indent_level("    x"), Some(1));
        assert_eq!(indent_level("         x"), Some(2));
    }

    #[test]
    fn width_counts_characters() {
        assert_eq!(indent_width("  \tx"), Some(3));
    }

    #[test]
    fn strip_stops_at_content() {
        assert_eq!(strip_indent("        a b", 4), "    a b");
        assert_eq!(strip_indent("  a", 4), "a");
        assert_eq!(strip_indent("   ", 8), "");
    }
}
