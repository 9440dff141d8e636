//! Viewport snapshot and element geometry.

use serde::{Deserialize, Serialize};

/// Read-only scroll/viewport state sampled by the host once per frame.
/// All evaluations within one `update` pass see the same snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Vertical scroll offset of the document (px).
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
    /// Full scrollable height of the document (px).
    pub document_height: f32,
}

impl Viewport {
    pub fn new(scroll_y: f32, width: f32, height: f32, document_height: f32) -> Self {
        Self {
            scroll_y,
            width,
            height,
            document_height,
        }
    }

    /// Maximum reachable scroll offset; zero when the page fits the viewport.
    #[inline]
    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.height).max(0.0)
    }

    /// Page scroll progress in percent, 0 when the page does not scroll.
    pub fn progress_percent(&self) -> f32 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / max * 100.0).clamp(0.0, 100.0)
    }

    pub fn with_scroll(mut self, scroll_y: f32) -> Self {
        self.scroll_y = scroll_y;
        self
    }
}

/// Bounding box in document coordinates (independent of the scroll offset).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_percent_is_clamped_and_safe_on_short_pages() {
        let vp = Viewport::new(500.0, 1280.0, 800.0, 1800.0);
        assert_eq!(vp.progress_percent(), 50.0);
        assert_eq!(vp.with_scroll(5000.0).progress_percent(), 100.0);
        let short = Viewport::new(0.0, 1280.0, 800.0, 600.0);
        assert_eq!(short.progress_percent(), 0.0);
    }
}
