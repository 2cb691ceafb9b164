//! Notice Render
//!
//! Turns untrusted notification text into an HTML fragment that is safe to
//! assign to `innerHTML`.
//!
//! # Levels
//!
//! - [`RenderLevel::EscapeOnly`]: escape and wrap in a paragraph (legacy)
//! - [`RenderLevel::RestrictedMarkdown`]: escape, then a small markdown
//!   subset (headings, bold, italic, links, inline code, lists, line breaks)
//!
//! Escaping always runs first and exactly once. Titles never go through
//! markdown; use [`render_title`].
//!
//! # Example
//!
//! ```rust
//! use notice_render::{renderer_for, LinkPolicy, RenderLevel};
//!
//! let renderer = renderer_for(RenderLevel::RestrictedMarkdown, LinkPolicy::default());
//! assert_eq!(
//!     renderer.render("**bold** and *italic*"),
//!     "<strong>bold</strong> and <em>italic</em>"
//! );
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod escape;
pub mod link;
pub mod markdown;
pub mod plain;

pub use error::RenderError;
pub use escape::escape_html;
pub use link::LinkPolicy;
pub use markdown::MarkdownRenderer;
pub use plain::EscapeOnlyRenderer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Renderer conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderLevel {
    /// Escape only, no markdown
    EscapeOnly,
    /// Escape, then restricted markdown
    #[default]
    RestrictedMarkdown,
}

impl RenderLevel {
    /// Stable name used in configuration and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EscapeOnly => "escape-only",
            Self::RestrictedMarkdown => "restricted-markdown",
        }
    }
}

impl fmt::Display for RenderLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderLevel {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "escape-only" => Ok(Self::EscapeOnly),
            "restricted-markdown" => Ok(Self::RestrictedMarkdown),
            other => Err(RenderError::UnknownLevel(other.to_string())),
        }
    }
}

/// Converts untrusted message text into a safe HTML fragment
///
/// Rendering is pure and infallible; empty input yields an empty string.
pub trait ContentRenderer: Send + Sync {
    /// Render `text` as an HTML fragment
    fn render(&self, text: &str) -> String;

    /// Conformance level implemented
    fn level(&self) -> RenderLevel;
}

/// Render a notification title: escaped plain text, never markdown
#[inline]
#[must_use]
pub fn render_title(title: &str) -> String {
    escape_html(title)
}

/// Create the renderer for `level`
#[must_use]
pub fn renderer_for(level: RenderLevel, links: LinkPolicy) -> Box<dyn ContentRenderer> {
    match level {
        RenderLevel::EscapeOnly => Box::new(EscapeOnlyRenderer),
        RenderLevel::RestrictedMarkdown => Box::new(MarkdownRenderer::new(links)),
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_round_trip() {
        for level in [RenderLevel::EscapeOnly, RenderLevel::RestrictedMarkdown] {
            assert_eq!(level.as_str().parse::<RenderLevel>().unwrap(), level);
        }
        assert!(matches!(
            "html".parse::<RenderLevel>(),
            Err(RenderError::UnknownLevel(_))
        ));
    }

    #[test]
    fn factory_picks_level() {
        let plain = renderer_for(RenderLevel::EscapeOnly, LinkPolicy::default());
        assert_eq!(plain.level(), RenderLevel::EscapeOnly);
        assert_eq!(plain.render("**x**"), "<p>**x**</p>");

        let md = renderer_for(RenderLevel::RestrictedMarkdown, LinkPolicy::default());
        assert_eq!(md.level(), RenderLevel::RestrictedMarkdown);
        assert_eq!(md.render("**x**"), "<strong>x</strong>");
    }

    #[test]
    fn title_is_never_markdown() {
        assert_eq!(render_title("**Hi** <b>"), "**Hi** &lt;b&gt;");
    }

    #[test]
    fn default_level_is_markdown() {
        assert_eq!(RenderLevel::default(), RenderLevel::RestrictedMarkdown);
    }
}
