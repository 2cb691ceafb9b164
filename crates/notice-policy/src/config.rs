//! Display record configuration

use notice_store::SameSite;
use serde::{Deserialize, Serialize};

/// How display records are named and retained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Prefix of the per-notification cookie name
    pub cookie_prefix: String,
    /// Days a display record is retained after its last write
    pub retention_days: u32,
    /// Cookie path scope
    pub path: String,
    /// Cookie cross-site policy
    pub same_site: SameSite,
}

impl PolicyConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With cookie name prefix
    #[inline]
    #[must_use]
    pub fn with_cookie_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cookie_prefix = prefix.into();
        self
    }

    /// With retention window
    #[inline]
    #[must_use]
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            cookie_prefix: "notification_views_".to_string(),
            retention_days: 365,
            path: "/".to_string(),
            same_site: SameSite::Lax,
        }
    }
}
