//! Notification descriptor
//!
//! The page template injects one descriptor per page load as a JSON object
//! with camelCase keys, or `null` when there is nothing to show.

use chrono::NaiveDate;
use notice_policy::Expiration;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NoticeResult;

/// Where a notification is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationKind {
    /// Dismissible overlay on page load
    #[default]
    Popup,
    /// Inline banner rendered by the page itself
    Banner,
}

/// One notification campaign as configured by an administrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDescriptor {
    /// Stable campaign identifier; keys the display record
    pub id: String,
    /// Plain-text title, untrusted
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Restricted-markdown body, untrusted
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// View limit; absent, zero or negative means unlimited
    #[serde(default)]
    pub max_displays: Option<i64>,
    /// Last display day, `YYYY-MM-DD` or an ISO date-time
    #[serde(default)]
    pub expiration_date: Option<String>,
    /// Administrator toggle
    #[serde(default)]
    pub enabled: bool,
    /// Popup or banner
    #[serde(default, rename = "type")]
    pub kind: NotificationKind,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NotificationDescriptor {
    /// Enabled popup with no limits
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            max_displays: None,
            expiration_date: None,
            enabled: true,
            kind: NotificationKind::Popup,
        }
    }

    /// Parse the page-global descriptor; `null` means no notification
    ///
    /// # Errors
    /// Returns `NoticeError::Descriptor` if the JSON is malformed or lacks an id
    pub fn from_page_json(raw: &str) -> NoticeResult<Option<Self>> {
        Ok(serde_json::from_str(raw)?)
    }

    /// With view limit
    #[inline]
    #[must_use]
    pub fn with_max_displays(mut self, max: u32) -> Self {
        self.max_displays = Some(i64::from(max));
        self
    }

    /// With expiration date
    #[inline]
    #[must_use]
    pub fn with_expiration(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    /// With administrator toggle
    #[inline]
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// With placement
    #[inline]
    #[must_use]
    pub fn with_kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Effective view limit; `None` when unlimited
    #[must_use]
    pub fn display_limit(&self) -> Option<u32> {
        self.max_displays
            .filter(|max| *max > 0)
            .map(|max| u32::try_from(max).unwrap_or(u32::MAX))
    }

    /// Enabled and not past its expiration day
    #[must_use]
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.enabled && !Expiration::parse(self.expiration_date.as_deref()).has_passed(today)
    }
}

/// Active notifications of `kind`, in input order
#[must_use]
pub fn select_active(
    descriptors: &[NotificationDescriptor],
    kind: NotificationKind,
    today: NaiveDate,
) -> Vec<&NotificationDescriptor> {
    descriptors
        .iter()
        .filter(|d| d.kind == kind && d.is_active(today))
        .collect()
}
