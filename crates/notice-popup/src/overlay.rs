//! Modal markup and the overlay port
//!
//! The popup never touches a document directly: it builds a self-contained
//! fragment and hands it to an [`Overlay`], which owns mounting, showing
//! and dismissal.

use crate::config::NoticeConfig;
use async_trait::async_trait;
use notice_render::escape_html;
use parking_lot::Mutex;
use std::sync::Arc;

/// Ready-to-mount modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupFragment {
    /// Notification the fragment was built for
    pub notification_id: String,
    /// DOM id of the modal root
    pub element_id: String,
    /// Complete modal markup
    pub html: String,
}

/// Build the dismissible modal around already-rendered title and body
///
/// `title_html` and `body_html` are inserted verbatim; element id and
/// dismiss label come from configuration and are escaped here.
#[must_use]
pub fn modal_html(title_html: &str, body_html: &str, config: &NoticeConfig) -> String {
    let id = escape_html(&config.element_id);
    let label = escape_html(&config.dismiss_label);
    format!(
        "<div class=\"modal fade\" id=\"{id}\" tabindex=\"-1\" \
         aria-labelledby=\"{id}-label\" aria-hidden=\"true\">\
         <div class=\"modal-dialog modal-dialog-centered\">\
         <div class=\"modal-content\">\
         <div class=\"modal-header\">\
         <h5 class=\"modal-title\" id=\"{id}-label\">\
         <i class=\"bi bi-megaphone-fill me-2\"></i>{title_html}</h5>\
         <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"modal\" aria-label=\"Close\"></button>\
         </div>\
         <div class=\"modal-body\">{body_html}</div>\
         <div class=\"modal-footer\">\
         <button type=\"button\" class=\"btn btn-primary\" data-bs-dismiss=\"modal\">{label}</button>\
         </div>\
         </div>\
         </div>\
         </div>"
    )
}

/// Host collaborator that displays a fragment as an overlay
#[async_trait]
pub trait Overlay: Send + Sync {
    /// Insert and show the fragment, replacing any previous one with the same element id
    async fn mount(&self, fragment: PopupFragment);
}

#[async_trait]
impl<T: Overlay + ?Sized> Overlay for Arc<T> {
    async fn mount(&self, fragment: PopupFragment) {
        (**self).mount(fragment).await;
    }
}

/// In-memory overlay that keeps every mounted fragment
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    mounted: Mutex<Vec<PopupFragment>>,
}

impl RecordingOverlay {
    /// Create an empty overlay
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragments mounted so far, oldest first
    #[must_use]
    pub fn mounted(&self) -> Vec<PopupFragment> {
        self.mounted.lock().clone()
    }

    /// Most recently mounted fragment
    #[must_use]
    pub fn last(&self) -> Option<PopupFragment> {
        self.mounted.lock().last().cloned()
    }

    /// Number of mounts
    #[must_use]
    pub fn len(&self) -> usize {
        self.mounted.lock().len()
    }

    /// Nothing mounted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.lock().is_empty()
    }
}

#[async_trait]
impl Overlay for RecordingOverlay {
    async fn mount(&self, fragment: PopupFragment) {
        let mut mounted = self.mounted.lock();
        mounted.retain(|existing| existing.element_id != fragment.element_id);
        mounted.push(fragment);
    }
}
