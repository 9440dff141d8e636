//! Page-load transition overlay: collapses a full-screen overlay from the top.

use crate::ease::{Ease, EaseKind};
use crate::outputs::StyleChange;
use crate::timeline::{Position, Timeline};
use crate::value::{Property, VisualState};

pub const OVERLAY_KEY: &str = "page-transition";
/// CSS transform-origin the host must set on the overlay.
pub const OVERLAY_ORIGIN: &str = "top";

#[derive(Clone, Debug)]
pub struct PageTransition {
    timeline: Timeline,
}

impl PageTransition {
    /// Overlay `scale_y` 1 → 0 over `duration` seconds (`power4.inOut`).
    pub fn new(duration: f32) -> Self {
        let mut timeline = Timeline::new(Ease::Power(4, EaseKind::InOut));
        timeline.add(
            OVERLAY_KEY,
            VisualState::default().with(Property::ScaleY, 1.0),
            VisualState::default().with(Property::ScaleY, 0.0),
            duration,
            Position::Absolute(0.0),
        );
        Self { timeline }
    }

    pub fn advance(&mut self, dt: f32) -> Vec<StyleChange> {
        self.timeline.advance(dt)
    }

    pub fn is_complete(&self) -> bool {
        self.timeline.is_complete()
    }

    /// Unmount: no further output.
    pub fn kill(&mut self) {
        self.timeline.kill();
    }
}

impl Default for PageTransition {
    fn default() -> Self {
        Self::new(1.0)
    }
}
