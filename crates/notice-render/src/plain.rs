//! Escape-only renderer
//!
//! The earlier popup showed the message verbatim. Kept selectable for pages
//! whose messages contain literal asterisks or brackets.

use crate::escape::escape_html;
use crate::{ContentRenderer, RenderLevel};

/// Escapes the message and wraps it in a paragraph
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeOnlyRenderer;

impl ContentRenderer for EscapeOnlyRenderer {
    fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        format!("<p>{}</p>", escape_html(text))
    }

    fn level(&self) -> RenderLevel {
        RenderLevel::EscapeOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_escaped_text() {
        assert_eq!(
            EscapeOnlyRenderer.render("<script>alert(1)</script>"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(EscapeOnlyRenderer.render(""), "");
    }

    #[test]
    fn markdown_is_literal() {
        assert_eq!(
            EscapeOnlyRenderer.render("## Title\n- item"),
            "<p>## Title\n- item</p>"
        );
    }
}
