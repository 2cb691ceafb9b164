//! Display Policy Engine
//!
//! Reads and writes display records through the injected [`ViewStore`] and
//! reads "today" from the injected [`Clock`].

use crate::config::PolicyConfig;
use crate::decision::{Decision, SuppressReason};
use crate::expiration::Expiration;
use notice_store::{Clock, Cookie, ViewStore};

/// Parse a stored view count
///
/// Leading whitespace and a `+` sign are skipped and the leading run of
/// ASCII digits is used, so `"3abc"` reads as 3. No digits, or a negative
/// value, reads as 0. Values past `u32::MAX` saturate.
#[must_use]
pub fn parse_view_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        })
}

/// Expiration and view-count gate for notifications
#[derive(Debug)]
pub struct DisplayPolicy<S, C> {
    store: S,
    clock: C,
    config: PolicyConfig,
}

impl<S: ViewStore, C: Clock> DisplayPolicy<S, C> {
    /// Create policy with default record configuration
    #[inline]
    #[must_use]
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            config: PolicyConfig::default(),
        }
    }

    /// With record configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: PolicyConfig) -> Self {
        self.config = config;
        self
    }

    /// Cookie name holding the record for `id`
    #[inline]
    #[must_use]
    pub fn cookie_name(&self, id: &str) -> String {
        format!("{}{}", self.config.cookie_prefix, id)
    }

    /// Whether the expiration day has passed
    ///
    /// Absent, empty and malformed dates never expire.
    #[must_use]
    pub fn is_expired(&self, expiration_date: Option<&str>) -> bool {
        let expiration = Expiration::parse(expiration_date);
        if let Expiration::Malformed(raw) = &expiration {
            tracing::warn!(expiration_date = %raw, "unparsable expiration date, treating as never expiring");
        }
        expiration.has_passed(self.clock.today())
    }

    /// Recorded views for `id`; 0 when absent or unparsable
    #[must_use]
    pub fn view_count(&self, id: &str) -> u32 {
        self.store
            .get(&self.cookie_name(id))
            .map_or(0, |raw| parse_view_count(&raw))
    }

    /// Record one more view and return the new count
    ///
    /// Read and write are separate store calls. Two callers sharing a store
    /// can both read `n` and both write `n + 1`.
    pub fn increment_view_count(&self, id: &str) -> u32 {
        let count = self.view_count(id).saturating_add(1);
        let cookie = Cookie::persistent(
            self.cookie_name(id),
            count.to_string(),
            self.clock.now(),
            self.config.retention_days,
        )
        .with_path(self.config.path.clone())
        .with_same_site(self.config.same_site);
        self.store.set(cookie);
        tracing::debug!(id, views = count, "recorded notification view");
        count
    }

    /// Evaluate expiration and view limit
    ///
    /// `max_displays` of `None` or `Some(0)` means unlimited. Never writes.
    #[must_use]
    pub fn check(&self, id: &str, max_displays: Option<u32>, expiration_date: Option<&str>) -> Decision {
        let expiration = Expiration::parse(expiration_date);
        match &expiration {
            Expiration::On(on) if expiration.has_passed(self.clock.today()) => {
                return Decision::Suppress(SuppressReason::Expired { on: *on });
            }
            Expiration::Malformed(raw) => {
                tracing::warn!(id, expiration_date = %raw, "unparsable expiration date, treating as never expiring");
            }
            _ => {}
        }

        if let Some(max) = max_displays.filter(|max| *max > 0) {
            let views = self.view_count(id);
            if views >= max {
                return Decision::Suppress(SuppressReason::LimitReached { views, max });
            }
        }

        Decision::Show
    }

    /// Whether the notification may be shown now
    #[inline]
    #[must_use]
    pub fn should_show(&self, id: &str, max_displays: Option<u32>, expiration_date: Option<&str>) -> bool {
        self.check(id, max_displays, expiration_date).is_show()
    }

    /// Record configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Backing store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Injected clock
    #[inline]
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
