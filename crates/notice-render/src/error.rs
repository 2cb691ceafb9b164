//! Error types for renderer selection

/// Errors selecting a renderer
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Level name not recognized
    #[error("unknown render level: '{0}' (expected 'escape-only' or 'restricted-markdown')")]
    UnknownLevel(String),
}
