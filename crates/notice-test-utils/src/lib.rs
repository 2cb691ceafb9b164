//! Testing utilities for the notice workspace
//!
//! Shared fixtures: a pinned clock, a jar sharing it, descriptors with
//! unique ids and a manager wired to an in-memory overlay.

#![allow(missing_docs)]

use chrono::NaiveDate;
use notice_popup::{NoticeConfig, NotificationDescriptor, NotificationManager, RecordingOverlay};
use notice_store::{CookieJar, FixedClock};
use std::sync::Arc;
use std::time::Duration;

pub type SharedClock = Arc<FixedClock>;
pub type SharedJar = Arc<CookieJar<SharedClock>>;
pub type TestManager = NotificationManager<SharedJar, SharedClock, Arc<RecordingOverlay>>;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn fixed_clock(year: i32, month: u32, day: u32) -> SharedClock {
    Arc::new(FixedClock::ymd(year, month, day).unwrap())
}

pub fn shared_jar(clock: &SharedClock) -> SharedJar {
    Arc::new(CookieJar::new(Arc::clone(clock)))
}

pub fn unique_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Enabled popup with a fresh id and no limits
pub fn popup(title: &str, message: &str) -> NotificationDescriptor {
    NotificationDescriptor::new(unique_id(), title, message)
}

/// Default config without the presentation delay
pub fn immediate_config() -> NoticeConfig {
    NoticeConfig::default().with_presentation_delay(Duration::ZERO)
}

pub struct Harness {
    pub clock: SharedClock,
    pub jar: SharedJar,
    pub overlay: Arc<RecordingOverlay>,
    pub manager: TestManager,
}

pub fn harness_with(today: NaiveDate, config: NoticeConfig) -> Harness {
    let clock = Arc::new(FixedClock::on(today));
    let jar = shared_jar(&clock);
    let overlay = Arc::new(RecordingOverlay::new());
    let manager = NotificationManager::new(Arc::clone(&jar), Arc::clone(&clock), Arc::clone(&overlay), config);
    Harness {
        clock,
        jar,
        overlay,
        manager,
    }
}

pub fn harness(today: NaiveDate) -> Harness {
    harness_with(today, immediate_config())
}
