//! In-memory cookie jar
//!
//! Behaves like the browser's cookie store for a single origin: a write with
//! a past expiry deletes, reads never return expired cookies.

use crate::clock::{Clock, SystemClock};
use crate::cookie::Cookie;
use crate::ViewStore;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;

/// Cookie store backing display records
///
/// The mutex guards one `get` or one `set` at a time. Callers that read,
/// modify and write back hold no lock in between.
pub struct CookieJar<C: Clock = SystemClock> {
    cookies: Mutex<BTreeMap<String, Cookie>>,
    clock: C,
}

impl Default for CookieJar<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> fmt::Debug for CookieJar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieJar")
            .field("cookie_count", &self.cookies.lock().len())
            .finish_non_exhaustive()
    }
}

impl<C: Clock> CookieJar<C> {
    /// Create empty jar reading expiry against `clock`
    #[inline]
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            cookies: Mutex::new(BTreeMap::new()),
            clock,
        }
    }

    /// Create jar holding `cookies`, dropping any already expired
    #[must_use]
    pub fn with_cookies(clock: C, cookies: impl IntoIterator<Item = Cookie>) -> Self {
        let jar = Self::new(clock);
        for cookie in cookies {
            jar.set(cookie);
        }
        jar
    }

    /// Build a jar from a `document.cookie` / `Cookie:` header string
    ///
    /// Segments are `;`-separated `name=value` pairs. Names and values are
    /// trimmed, empty segments are skipped and the first occurrence of a name
    /// wins. Parsed cookies are session cookies.
    #[must_use]
    pub fn parse_header(clock: C, header: &str) -> Self {
        let mut cookies = BTreeMap::new();
        for part in header.split(';') {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                continue;
            }
            let (name, value) = trimmed
                .split_once('=')
                .map_or((trimmed, ""), |(n, v)| (n.trim(), v.trim()));
            if name.is_empty() {
                continue;
            }
            cookies
                .entry(name.to_string())
                .or_insert_with(|| Cookie::session(name, value));
        }
        Self {
            cookies: Mutex::new(cookies),
            clock,
        }
    }

    /// Render live cookies as a `name=value; name=value` header, sorted by name
    #[must_use]
    pub fn to_header(&self) -> String {
        self.cookies()
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Snapshot of live cookies, sorted by name
    #[must_use]
    pub fn cookies(&self) -> Vec<Cookie> {
        let now = self.clock.now();
        let mut guard = self.cookies.lock();
        guard.retain(|_, c| !c.is_expired_at(now));
        guard.values().cloned().collect()
    }

    /// Remove a cookie regardless of expiry
    pub fn remove(&self, name: &str) -> Option<Cookie> {
        self.cookies.lock().remove(name)
    }

    /// Number of live cookies
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies().len()
    }

    /// Whether the jar holds no live cookies
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The clock this jar reads expiry against
    #[inline]
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> ViewStore for CookieJar<C> {
    fn get(&self, name: &str) -> Option<String> {
        let now = self.clock.now();
        let mut guard = self.cookies.lock();
        match guard.get(name) {
            Some(cookie) if cookie.is_expired_at(now) => {
                tracing::trace!(name, "dropping expired cookie");
                guard.remove(name);
                None
            }
            Some(cookie) => Some(cookie.value.clone()),
            None => None,
        }
    }

    fn set(&self, cookie: Cookie) {
        let now = self.clock.now();
        let mut guard = self.cookies.lock();
        if cookie.is_expired_at(now) {
            guard.remove(&cookie.name);
        } else {
            guard.insert(cookie.name.clone(), cookie);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::ymd(2026, 10, 16).unwrap())
    }

    #[test]
    fn get_missing_is_none() {
        let jar = CookieJar::new(clock());
        assert!(jar.get("notification_views_x").is_none());
        assert!(jar.is_empty());
    }

    #[test]
    fn set_then_get() {
        let clock = clock();
        let jar = CookieJar::new(Arc::clone(&clock));
        jar.set(Cookie::persistent("a", "1", clock.now(), 365));
        jar.set(Cookie::persistent("a", "2", clock.now(), 365));
        assert_eq!(jar.get("a").as_deref(), Some("2"));
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn cookie_disappears_after_retention() {
        let clock = clock();
        let jar = CookieJar::new(Arc::clone(&clock));
        jar.set(Cookie::persistent("a", "1", clock.now(), 365));

        clock.advance_days(364);
        assert_eq!(jar.get("a").as_deref(), Some("1"));

        clock.advance_days(1);
        assert!(jar.get("a").is_none());
    }

    #[test]
    fn past_expiry_deletes() {
        let clock = clock();
        let jar = CookieJar::new(Arc::clone(&clock));
        jar.set(Cookie::session("a", "1"));

        let mut tombstone = Cookie::session("a", "");
        tombstone.expires = Some(clock.now());
        jar.set(tombstone);

        assert!(jar.get("a").is_none());
    }

    #[test]
    fn parse_header_trims_and_keeps_first() {
        let jar = CookieJar::parse_header(
            clock(),
            " notification_views_n1=3 ;; theme = dark; notification_views_n1=9; flag",
        );
        assert_eq!(jar.get("notification_views_n1").as_deref(), Some("3"));
        assert_eq!(jar.get("theme").as_deref(), Some("dark"));
        assert_eq!(jar.get("flag").as_deref(), Some(""));
        assert_eq!(jar.len(), 3);
    }

    #[test]
    fn header_round_trip_is_sorted() {
        let jar = CookieJar::parse_header(clock(), "b=2; a=1");
        assert_eq!(jar.to_header(), "a=1; b=2");
    }

    #[test]
    fn with_cookies_drops_expired() {
        let clock = clock();
        let mut stale = Cookie::session("old", "1");
        stale.expires = Some(clock.now() - chrono::Duration::days(1));
        let jar = CookieJar::with_cookies(Arc::clone(&clock), [stale, Cookie::session("new", "1")]);
        assert_eq!(jar.to_header(), "new=1");
    }
}
