//! Restricted markdown renderer
//!
//! The whole input is escaped first, then parsed line by line. Markup
//! characters used by the subset (`#`, `-`, `*`, `[`, `]`, `(`, `)`, `` ` ``)
//! are untouched by escaping, and escaping never introduces them.
//!
//! # Precedence
//!
//! | Order | Syntax            | Output                                  |
//! |-------|-------------------|-----------------------------------------|
//! | 1     | `### text` line   | `<h5>`                                  |
//! | 2     | `## text` line    | `<h4>`                                  |
//! | 3     | `**text**`        | `<strong>`                              |
//! | 4     | `*text*`          | `<em>`                                  |
//! | 5     | `[text](url)`     | `<a target="_blank" rel="noopener noreferrer">` |
//! | 6     | `` `text` ``      | `<code>`, content literal               |
//! | 7     | `- text` lines    | `<li>`, contiguous runs in one `<ul>`   |
//! | 8     | line endings      | `␠␠\n` → `<br>`, `\n\n` → `<br><br>`, `\n` → space |
//!
//! Inline spans (3–6) never cross a line. Scanning is leftmost-first; at one
//! position bold is tried before italic, so a `**` pair is consumed whole and
//! italic never sees its markers. An italic span steps over any complete
//! `**` pair inside it rather than closing on it. Bold, italic and link
//! text nest; code content does not.

use crate::escape::escape_html;
use crate::link::LinkPolicy;
use crate::{ContentRenderer, RenderLevel};

/// Escape-then-markdown renderer
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    links: LinkPolicy,
}

impl MarkdownRenderer {
    /// Create renderer with a link policy
    #[inline]
    #[must_use]
    pub fn new(links: LinkPolicy) -> Self {
        Self { links }
    }

    /// Render block structure, leaving line endings for [`normalize_breaks`]
    fn render_blocks(&self, escaped: &str) -> String {
        let lines: Vec<&str> = escaped.split('\n').collect();
        let mut out = String::with_capacity(escaped.len() + escaped.len() / 2);
        let mut i = 0;

        while i < lines.len() {
            if list_item(lines[i]).is_some() {
                out.push_str("<ul>");
                while let Some(item) = lines.get(i).copied().and_then(list_item) {
                    out.push_str("<li>");
                    self.render_inline(item, &mut out);
                    out.push_str("</li>");
                    i += 1;
                }
                out.push_str("</ul>");
                // a list run swallows the newline after each item
                continue;
            }

            let line = lines[i];
            if let Some(text) = heading(line, "### ") {
                self.wrap("h5", text, &mut out);
            } else if let Some(text) = heading(line, "## ") {
                self.wrap("h4", text, &mut out);
            } else {
                self.render_inline(line, &mut out);
            }

            i += 1;
            if i < lines.len() {
                out.push('\n');
            }
        }
        out
    }

    fn wrap(&self, tag: &str, text: &str, out: &mut String) {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        self.render_inline(text, out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    /// Render inline spans of one line
    fn render_inline(&self, text: &str, out: &mut String) {
        let mut rest = text;
        while let Some(pos) = rest.find(|c: char| matches!(c, '*' | '[' | '`')) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            match self.inline_span(tail, out) {
                Some(consumed) => rest = &tail[consumed..],
                None => {
                    // marker without a partner is literal text
                    out.push_str(&tail[..1]);
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
    }

    /// Try each span rule at the start of `tail`; returns bytes consumed
    fn inline_span(&self, tail: &str, out: &mut String) -> Option<usize> {
        if let Some((inner, consumed)) = delimited(tail, "**") {
            self.wrap("strong", inner, out);
            return Some(consumed);
        }
        if let Some((inner, consumed)) = emphasis(tail) {
            self.wrap("em", inner, out);
            return Some(consumed);
        }
        if let Some((label, url, consumed)) = link(tail) {
            if self.links.allows(url) {
                out.push_str("<a href=\"");
                out.push_str(url);
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                self.render_inline(label, out);
                out.push_str("</a>");
            } else {
                tracing::debug!(url, "dropping link with disallowed scheme");
                self.render_inline(label, out);
            }
            return Some(consumed);
        }
        if let Some((inner, consumed)) = delimited(tail, "`") {
            out.push_str("<code>");
            out.push_str(inner);
            out.push_str("</code>");
            return Some(consumed);
        }
        None
    }
}

impl ContentRenderer for MarkdownRenderer {
    fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let escaped = escape_html(&text.replace("\r\n", "\n"));
        normalize_breaks(&self.render_blocks(&escaped))
    }

    fn level(&self) -> RenderLevel {
        RenderLevel::RestrictedMarkdown
    }
}

/// `- text` list item content
fn list_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ").filter(|item| !item.is_empty())
}

/// Heading content after `marker`
fn heading<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker).filter(|text| !text.is_empty())
}

/// `marker inner marker` at the start of `tail`, with non-empty `inner`
///
/// The closing marker is the first one after at least one content byte.
fn delimited<'a>(tail: &'a str, marker: &str) -> Option<(&'a str, usize)> {
    let body = tail.strip_prefix(marker)?;
    let first_len = body.chars().next()?.len_utf8();
    let close = first_len + body[first_len..].find(marker)?;
    Some((&body[..close], marker.len() + close + marker.len()))
}

/// `*inner*` at the start of `tail`, with non-empty `inner`
///
/// A `**` pair between the markers is bold and is stepped over whole, so
/// italic never closes on a bold marker.
fn emphasis(tail: &str) -> Option<(&str, usize)> {
    let body = tail.strip_prefix('*')?;
    let mut from = body.chars().next()?.len_utf8();
    while let Some(offset) = body[from..].find('*') {
        let at = from + offset;
        match delimited(&body[at..], "**") {
            Some((_, consumed)) => from = at + consumed,
            None => return Some((&body[..at], at + 2)),
        }
    }
    None
}

/// `[label](url)` at the start of `tail`, with non-empty label and url
fn link(tail: &str) -> Option<(&str, &str, usize)> {
    let (label, after_label) = {
        let body = tail.strip_prefix('[')?;
        let first_len = body.chars().next()?.len_utf8();
        let close = first_len + body[first_len..].find("](")?;
        (&body[..close], &body[close + 2..])
    };
    let first_len = after_label.chars().next()?.len_utf8();
    let close = first_len + after_label[first_len..].find(')')?;
    let url = &after_label[..close];
    let consumed = 1 + label.len() + 2 + url.len() + 1;
    Some((label, url, consumed))
}

/// Collapse line endings into HTML breaks and spaces
fn normalize_breaks(html: &str) -> String {
    html.replace("  \n", "<br>")
        .replace("\n\n", "<br><br>")
        .replace('\n', " ")
}
