//! Expiration dates
//!
//! Only the calendar date matters. Admin forms post ISO date-times, pages may
//! inject plain dates, so both are accepted and the time part is dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parsed expiration of a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiration {
    /// No expiration date
    Never,
    /// Last calendar day the notification may be shown
    On(NaiveDate),
    /// Unparsable input, kept for diagnostics; never expires
    Malformed(String),
}

impl Expiration {
    /// Parse an optional expiration string
    ///
    /// `None`, empty and whitespace-only strings mean [`Expiration::Never`].
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::Never;
        };

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Self::On(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Self::On(dt.date_naive());
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map_or_else(|| Self::Malformed(raw.to_string()), |dt| Self::On(dt.date()))
    }

    /// Whether `today` is strictly after the expiration day
    #[must_use]
    pub fn has_passed(&self, today: NaiveDate) -> bool {
        match self {
            Self::On(date) => today > *date,
            Self::Never | Self::Malformed(_) => false,
        }
    }

    /// Expiration day, if one was given and understood
    #[inline]
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::On(date) => Some(*date),
            Self::Never | Self::Malformed(_) => None,
        }
    }
}
