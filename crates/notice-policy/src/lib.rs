//! Notice Policy
//!
//! Decides whether a notification may be shown now, and records that it was.
//!
//! # Rules
//!
//! 1. An expired notification is never shown. Expiry is day-granular and the
//!    expiration day itself is still a display day.
//! 2. With `max_displays > 0`, a notification is never shown once its view
//!    count reaches the limit.
//! 3. Otherwise it is shown, and the caller records the display with
//!    [`DisplayPolicy::increment_view_count`] exactly once.
//!
//! # Example
//!
//! ```rust
//! use notice_policy::DisplayPolicy;
//! use notice_store::{CookieJar, FixedClock};
//! use std::sync::Arc;
//!
//! let clock = Arc::new(FixedClock::ymd(2026, 10, 16).unwrap());
//! let policy = DisplayPolicy::new(CookieJar::new(Arc::clone(&clock)), clock);
//!
//! assert!(policy.should_show("n1", Some(1), Some("2099-01-01")));
//! policy.increment_view_count("n1");
//! assert!(!policy.should_show("n1", Some(1), Some("2099-01-01")));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod decision;
pub mod expiration;
pub mod policy;

pub use config::PolicyConfig;
pub use decision::{Decision, SuppressReason};
pub use expiration::Expiration;
pub use policy::{parse_view_count, DisplayPolicy};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
