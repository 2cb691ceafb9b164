//! Page-load orchestration
//!
//! Decide, record, render, wait, mount. The decision and the view record
//! happen synchronously in [`NotificationManager::prepare`]; the only
//! suspension point is the presentation delay in
//! [`NotificationManager::present`]. Once a view has been recorded the
//! popup is always handed to the overlay.

use crate::config::NoticeConfig;
use crate::descriptor::NotificationDescriptor;
use crate::overlay::{modal_html, Overlay, PopupFragment};
use notice_policy::{Decision, DisplayPolicy, SuppressReason};
use notice_render::{render_title, renderer_for, ContentRenderer};
use notice_store::{Clock, ViewStore};
use std::fmt;
use tracing::{debug, info};

/// Result of the synchronous half of a presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// Not shown; nothing was recorded
    Suppressed(SuppressReason),
    /// View recorded and fragment built
    Ready {
        /// View count after recording this view
        views: u32,
        /// Modal to mount
        fragment: PopupFragment,
    },
}

/// Result of a full presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not shown
    Suppressed(SuppressReason),
    /// Mounted on the overlay
    Presented {
        /// View count including this presentation
        views: u32,
    },
}

impl Outcome {
    /// Whether the popup was mounted
    #[inline]
    #[must_use]
    pub fn is_presented(&self) -> bool {
        matches!(self, Self::Presented { .. })
    }
}

/// Runs the display policy for a page's notification and presents it
pub struct NotificationManager<S, C, O> {
    policy: DisplayPolicy<S, C>,
    renderer: Box<dyn ContentRenderer>,
    overlay: O,
    config: NoticeConfig,
}

impl<S, C, O> fmt::Debug for NotificationManager<S, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationManager")
            .field("render_level", &self.renderer.level())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: ViewStore, C: Clock, O: Overlay> NotificationManager<S, C, O> {
    /// Create a manager; the renderer follows `config.render_level`
    #[must_use]
    pub fn new(store: S, clock: C, overlay: O, config: NoticeConfig) -> Self {
        let policy = DisplayPolicy::new(store, clock).with_config(config.policy.clone());
        let renderer = renderer_for(config.render_level, config.links.clone());
        Self {
            policy,
            renderer,
            overlay,
            config,
        }
    }

    /// Replace the message renderer
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn ContentRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Evaluate without recording anything
    #[must_use]
    pub fn evaluate(&self, descriptor: &NotificationDescriptor) -> Decision {
        if !descriptor.enabled {
            return Decision::Suppress(SuppressReason::Disabled);
        }
        self.policy.check(
            &descriptor.id,
            descriptor.display_limit(),
            descriptor.expiration_date.as_deref(),
        )
    }

    /// Decide and, when shown, record exactly one view and build the modal
    pub fn prepare(&self, descriptor: &NotificationDescriptor) -> Prepared {
        if let Decision::Suppress(reason) = self.evaluate(descriptor) {
            debug!(id = %descriptor.id, %reason, "notification suppressed");
            return Prepared::Suppressed(reason);
        }

        let views = self.policy.increment_view_count(&descriptor.id);
        let title = render_title(&descriptor.title);
        let body = self.renderer.render(&descriptor.message);
        let fragment = PopupFragment {
            notification_id: descriptor.id.clone(),
            element_id: self.config.element_id.clone(),
            html: modal_html(&title, &body, &self.config),
        };
        Prepared::Ready { views, fragment }
    }

    /// Prepare, wait the presentation delay, then mount on the overlay
    pub async fn present(&self, descriptor: &NotificationDescriptor) -> Outcome {
        match self.prepare(descriptor) {
            Prepared::Suppressed(reason) => Outcome::Suppressed(reason),
            Prepared::Ready { views, fragment } => {
                let delay = self.config.presentation_delay();
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                self.overlay.mount(fragment).await;
                info!(id = %descriptor.id, views, "notification presented");
                Outcome::Presented { views }
            }
        }
    }

    /// Page entry point; `None` means the page carries no notification
    pub async fn init(&self, page_data: Option<&NotificationDescriptor>) -> Option<Outcome> {
        match page_data {
            Some(descriptor) => Some(self.present(descriptor).await),
            None => {
                debug!("no notification on page");
                None
            }
        }
    }

    /// Display policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &DisplayPolicy<S, C> {
        &self.policy
    }

    /// Overlay collaborator
    #[inline]
    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &NoticeConfig {
        &self.config
    }
}
