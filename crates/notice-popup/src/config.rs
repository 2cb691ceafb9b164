//! Popup configuration
//!
//! Every field has a default, so an empty TOML file is a valid config.

use crate::error::{NoticeError, NoticeResult};
use notice_policy::PolicyConfig;
use notice_render::{LinkPolicy, RenderLevel};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Popup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Delay between the display decision and mounting the overlay
    pub presentation_delay_ms: u64,
    /// DOM id of the modal element
    pub element_id: String,
    /// Label of the footer dismiss button
    pub dismiss_label: String,
    /// Message renderer level
    pub render_level: RenderLevel,
    /// Link scheme allow-list
    pub links: LinkPolicy,
    /// Display record settings
    pub policy: PolicyConfig,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            presentation_delay_ms: 500,
            element_id: "notification-popup-modal".to_string(),
            dismiss_label: "Got it!".to_string(),
            render_level: RenderLevel::RestrictedMarkdown,
            links: LinkPolicy::default(),
            policy: PolicyConfig::default(),
        }
    }
}

impl NoticeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML
    ///
    /// # Errors
    /// Returns `NoticeError::Config` if the TOML is invalid
    pub fn from_toml_str(raw: &str) -> NoticeResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// - `NoticeError::ConfigIo` if the file cannot be read
    /// - `NoticeError::Config` if the TOML is invalid
    pub async fn load(path: impl AsRef<Path>) -> NoticeResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| NoticeError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&raw)
    }

    /// With presentation delay
    #[inline]
    #[must_use]
    pub fn with_presentation_delay(mut self, delay: Duration) -> Self {
        self.presentation_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With renderer level
    #[inline]
    #[must_use]
    pub fn with_render_level(mut self, level: RenderLevel) -> Self {
        self.render_level = level;
        self
    }

    /// With display record settings
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// Presentation delay
    #[inline]
    #[must_use]
    pub fn presentation_delay(&self) -> Duration {
        Duration::from_millis(self.presentation_delay_ms)
    }
}
