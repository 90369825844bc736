//! Scroll-driven behaviors: back-to-top visibility, anchor offsets, the
//! progress bar, and per-frame coalescing of scroll work.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Tracks back-to-top button visibility so the DOM is only touched when it
/// flips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackToTop {
    threshold_px: f64,
    visible: bool,
}

impl BackToTop {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, visible: false }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the current scroll position. Returns the new visibility when it
    /// changed, `None` otherwise.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let visible = scroll_y > self.threshold_px;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}

/// Scroll target for an in-page anchor, leaving `offset_px` above it.
#[must_use]
pub fn anchor_target_top(element_offset_top: f64, offset_px: f64) -> f64 {
    (element_offset_top - offset_px).max(0.0)
}

/// The element id an in-page `href` points at: `"#contact"` → `"contact"`.
/// A bare `"#"` or a non-fragment link yields `None`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Reading progress as a percentage in `0..=100`.
#[must_use]
pub fn progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should request an animation frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Call from the animation-frame callback once the update ran.
    pub fn complete(&mut self) {
        self.ticking = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}
