/// Escape the five HTML-significant characters for insertion into markup
/// or attribute values. Not idempotent: `&amp;` becomes `&amp;amp;`.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape an optional field, treating `None` as the empty string.
pub fn html_escape_opt(s: Option<&str>) -> String {
    html_escape(s.unwrap_or(""))
}
