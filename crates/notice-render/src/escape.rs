//! HTML escaping

/// Escape text for HTML element content and quoted attribute values
///
/// Replaces `&`, `<`, `>`, `"` and `'`. Not idempotent: escaping `&amp;`
/// again yields `&amp;amp;`, so apply it once to raw input only.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
