//! Notice Store
//!
//! The persistence primitive behind notification display records: a
//! cookie-equivalent key/value store plus the clock it reads expiry against.
//!
//! # Ports
//!
//! - [`ViewStore`]: `{get, set}` over named cookies
//! - [`Clock`]: `{now, today}` so date boundaries are testable
//!
//! # Architecture
//!
//! ```text
//! DisplayPolicy ──get/set──▶ ViewStore (CookieJar) ──snapshot──▶ JarFile (JSON)
//!        │                        │
//!        └──────── today ──▶ Clock ◀── expiry checks
//! ```
//!
//! # Example
//!
//! ```rust
//! use notice_store::{Clock, Cookie, CookieJar, FixedClock, ViewStore};
//! use std::sync::Arc;
//!
//! let clock = Arc::new(FixedClock::ymd(2026, 10, 16).unwrap());
//! let jar = CookieJar::new(Arc::clone(&clock));
//! jar.set(Cookie::persistent("notification_views_n1", "1", clock.now(), 365));
//! assert_eq!(jar.get("notification_views_n1").as_deref(), Some("1"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod clock;
pub mod cookie;
pub mod error;
pub mod file;
pub mod jar;

pub use clock::{Clock, FixedClock, SystemClock};
pub use cookie::{Cookie, SameSite};
pub use error::StoreError;
pub use file::JarFile;
pub use jar::CookieJar;

use std::sync::Arc;

/// Storage port for display records
///
/// Mirrors the browser cookie API: reads by name, writes whole cookies.
/// Each call is individually consistent; there is no read-modify-write
/// transaction, so concurrent writers race and the last write wins.
pub trait ViewStore: Send + Sync {
    /// Read the live value stored under `name`
    fn get(&self, name: &str) -> Option<String>;

    /// Store `cookie`, replacing any cookie with the same name
    fn set(&self, cookie: Cookie);
}

impl<T: ViewStore + ?Sized> ViewStore for Arc<T> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, cookie: Cookie) {
        (**self).set(cookie);
    }
}

impl<T: ViewStore + ?Sized> ViewStore for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, cookie: Cookie) {
        (**self).set(cookie);
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
