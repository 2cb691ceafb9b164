//! Link scheme policy
//!
//! Escaping neutralizes markup, not URL schemes: `[x](javascript:...)`
//! survives it untouched. Links are therefore checked against an allow-list
//! before an anchor is emitted.

use serde::{Deserialize, Serialize};

/// Which link targets may become anchors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPolicy {
    /// Allowed schemes, lower case
    pub allowed_schemes: Vec<String>,
    /// Whether scheme-less (relative) URLs are allowed
    pub allow_relative: bool,
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self {
            allowed_schemes: vec!["http".into(), "https".into(), "mailto".into()],
            allow_relative: true,
        }
    }
}

impl LinkPolicy {
    /// Policy allowing exactly `schemes` plus relative URLs
    #[must_use]
    pub fn with_schemes<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_schemes: schemes
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
            allow_relative: true,
        }
    }

    /// Whether `url` may be used as an anchor target
    #[must_use]
    pub fn allows(&self, url: &str) -> bool {
        match scheme_of(url) {
            Some(scheme) => self.allowed_schemes.iter().any(|s| *s == scheme),
            None => self.allow_relative,
        }
    }
}

/// Lower-cased scheme of `url`, or `None` for a relative URL
///
/// Browsers ignore ASCII whitespace and control characters inside the
/// scheme (`java\tscript:`), so they are dropped before looking.
fn scheme_of(url: &str) -> Option<String> {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();
    let (candidate, _) = cleaned.split_once(':')?;

    let mut chars = candidate.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    (starts_alpha && rest_valid).then(|| candidate.to_ascii_lowercase())
}
