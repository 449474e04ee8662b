//! Renderer configuration

use std::time::Duration;

use crate::locate::INDEX_PAGE;
use crate::transition::TransitionConfig;

/// Settings for a [`TreeRenderer`](crate::TreeRenderer).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use navtree::RendererConfig;
///
/// let config = RendererConfig::default()
///     .with_relpath("../")
///     .with_frame_interval(Duration::from_millis(33));
/// ```
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Prefix joining the current page to the documentation root.
    ///
    /// Prepended to every link and glyph image path. Default: empty
    pub relpath: String,

    /// Page whose row is selected when the target page is not in the table.
    ///
    /// Default: `index.html`
    pub fallback_page: String,

    /// Expand/collapse animation.
    ///
    /// Default: 200ms swing
    pub reveal: TransitionConfig,

    /// Time between reveal frames.
    ///
    /// Default: 16ms
    pub frame_interval: Duration,

    /// When true, reveals complete on the spot.
    ///
    /// Default: false
    pub reduced_motion: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            relpath: String::new(),
            fallback_page: INDEX_PAGE.to_string(),
            reveal: TransitionConfig::fast(),
            frame_interval: Duration::from_millis(16),
            reduced_motion: false,
        }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relpath(mut self, relpath: impl Into<String>) -> Self {
        self.relpath = relpath.into();
        self
    }

    pub fn with_fallback_page(mut self, page: impl Into<String>) -> Self {
        self.fallback_page = page.into();
        self
    }

    pub fn with_reveal(mut self, reveal: TransitionConfig) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn with_reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    /// The reveal actually used, honoring reduced motion.
    pub fn effective_reveal(&self) -> TransitionConfig {
        if self.reduced_motion {
            TransitionConfig::instant()
        } else {
            self.reveal
        }
    }
}
