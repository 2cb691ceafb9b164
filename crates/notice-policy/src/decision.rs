//! Display decisions

use chrono::NaiveDate;
use std::fmt;

/// Why a notification was not shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// Turned off by the administrator
    Disabled,
    /// Expiration day has passed
    Expired {
        /// Last valid day
        on: NaiveDate,
    },
    /// View limit reached
    LimitReached {
        /// Recorded views
        views: u32,
        /// Configured limit
        max: u32,
    },
}

impl fmt::Display for SuppressReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::Expired { on } => write!(f, "expired after {on}"),
            Self::LimitReached { views, max } => write!(f, "shown {views} of {max} times"),
        }
    }
}

/// Outcome of evaluating a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// May be shown now
    Show,
    /// Must not be shown
    Suppress(SuppressReason),
}

impl Decision {
    /// Whether display is authorized
    #[inline]
    #[must_use]
    pub fn is_show(&self) -> bool {
        matches!(self, Self::Show)
    }

    /// Suppression reason, if any
    #[inline]
    #[must_use]
    pub fn reason(&self) -> Option<SuppressReason> {
        match self {
            Self::Show => None,
            Self::Suppress(reason) => Some(*reason),
        }
    }
}
