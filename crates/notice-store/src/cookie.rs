//! Cookie value type
//!
//! A display record is a single cookie. Its `Display` form is the assignment
//! string a page writes to `document.cookie`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cross-site sending policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
    /// Same-site requests only
    Strict,
    /// Same-site requests plus top-level navigations
    #[default]
    Lax,
    /// Always sent
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        };
        f.write_str(s)
    }
}

/// A named value with optional expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Expiry instant; `None` for a session cookie
    pub expires: Option<DateTime<Utc>>,
    /// Path scope
    pub path: String,
    /// Cross-site policy
    pub same_site: SameSite,
}

impl Cookie {
    /// Session cookie scoped to the whole site
    #[must_use]
    pub fn session(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires: None,
            path: "/".to_string(),
            same_site: SameSite::Lax,
        }
    }

    /// Cookie that lives `days` days from `now`
    #[must_use]
    pub fn persistent(
        name: impl Into<String>,
        value: impl Into<String>,
        now: DateTime<Utc>,
        days: u32,
    ) -> Self {
        let mut cookie = Self::session(name, value);
        cookie.expires = Some(now + Duration::days(i64::from(days)));
        cookie
    }

    /// With path scope
    #[inline]
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// With cross-site policy
    #[inline]
    #[must_use]
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Whether the cookie is gone at `now`
    #[inline]
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|expires| expires <= now)
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(expires) = self.expires {
            write!(f, "; expires={}", expires.format("%a, %d %b %Y %H:%M:%S GMT"))?;
        }
        write!(f, "; path={}; SameSite={}", self.path, self.same_site)
    }
}
