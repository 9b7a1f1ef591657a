//! Markup escaping.

/// Replace `&`, `<`, `>`, `'` and `"` with their entity forms.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}
