//! Clock port
//!
//! Expiration is decided at calendar-day granularity, so the policy needs a
//! notion of "today" that tests can pin.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

/// Source of the current instant and calendar day
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day in the viewer's local time zone
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Operating system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for deterministic tests
///
/// Reports its calendar day in UTC so results do not depend on the host
/// time zone.
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Clock pinned to `instant`
    #[inline]
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Clock pinned to noon UTC on `date`
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
        Self::at(date.and_time(noon).and_utc())
    }

    /// Clock pinned to noon UTC on the given day; `None` if the date does not exist
    #[must_use]
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::on)
    }

    /// Move the clock to `instant`
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock() = instant;
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: i64) {
        let mut guard = self.instant.lock();
        *guard += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock()
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
