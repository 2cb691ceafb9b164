//! Notice Popup
//!
//! Page-load orchestration of the homepage notification popup: read the
//! page's descriptor, ask the display policy, record the view, render the
//! modal and hand it to the host overlay after a short delay.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  NotificationManager                     │
//! │                                                          │
//! │  descriptor ──▶ DisplayPolicy ──▶ ContentRenderer        │
//! │                   │   (store, clock)     │               │
//! │                   ▼                      ▼               │
//! │              view recorded         modal_html            │
//! │                                          │               │
//! │                          delay ──▶ Overlay::mount        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use notice_popup::{NoticeConfig, NotificationDescriptor, NotificationManager, RecordingOverlay};
//! use notice_store::{CookieJar, FixedClock};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let clock = Arc::new(FixedClock::ymd(2026, 10, 16).unwrap());
//! let jar = CookieJar::new(Arc::clone(&clock));
//! let config = NoticeConfig::default().with_presentation_delay(Duration::ZERO);
//! let manager = NotificationManager::new(jar, clock, RecordingOverlay::new(), config);
//!
//! let page = r#"{"id":"n1","title":"Shabbat","message":"**Candles** 6:02","enabled":true}"#;
//! let descriptor = NotificationDescriptor::from_page_json(page).unwrap();
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
//! let outcome = runtime.block_on(manager.init(descriptor.as_ref()));
//! assert!(outcome.is_some_and(|o| o.is_presented()));
//! assert_eq!(manager.overlay().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod descriptor;
pub mod error;
pub mod manager;
pub mod overlay;

pub use config::NoticeConfig;
pub use descriptor::{select_active, NotificationDescriptor, NotificationKind};
pub use error::{NoticeError, NoticeResult};
pub use manager::{NotificationManager, Outcome, Prepared};
pub use overlay::{modal_html, Overlay, PopupFragment, RecordingOverlay};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
