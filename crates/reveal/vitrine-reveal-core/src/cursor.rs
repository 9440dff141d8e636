//! Custom cursor: a dot and a trailing ring easing toward the pointer, with a
//! hover state driven through the [`Hoverable`] capability.

use hashbrown::HashSet;

use crate::ease::Ease;
use crate::outputs::StyleChange;
use crate::tween::{Direction, Tween};
use crate::value::{lerp_f32, Property};

pub const DOT_KEY: &str = "cursor";
pub const TRAIL_KEY: &str = "cursor-trail";
pub const DOT_HOVER_CLASS: &str = "cursor-hover";
pub const TRAIL_HOVER_CLASS: &str = "cursor-trail-hover";

/// Elements the host should bind to the cursor's hover capability.
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, [role=\"button\"], input, textarea, select, [tabindex]:not([tabindex=\"-1\"])";

/// Hover capability attached to interactive elements.
pub trait Hoverable {
    fn on_enter(&mut self, element: &str);
    fn on_leave(&mut self, element: &str);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerKind {
    Fine,
    /// Touch devices: the custom cursor is not rendered at all.
    Coarse,
}

#[derive(Clone, Debug)]
struct Follower {
    key: &'static str,
    duration: f32,
    pos: (f32, f32),
    from: (f32, f32),
    target: (f32, f32),
    tween: Tween,
}

impl Follower {
    fn new(key: &'static str, duration: f32) -> Self {
        Self {
            key,
            duration,
            pos: (0.0, 0.0),
            from: (0.0, 0.0),
            target: (0.0, 0.0),
            tween: Tween::new(duration, 0.0, Ease::default()),
        }
    }

    fn retarget(&mut self, x: f32, y: f32) {
        self.from = self.pos;
        self.target = (x, y);
        // Each move starts a fresh tween from the current position.
        self.tween = Tween::new(self.duration, 0.0, Ease::default());
        self.tween.play(Direction::Forward);
    }

    fn advance(&mut self, dt: f32, out: &mut Vec<StyleChange>) {
        if let Some(step) = self.tween.advance(dt) {
            self.pos = (
                lerp_f32(self.from.0, self.target.0, step.eased),
                lerp_f32(self.from.1, self.target.1, step.eased),
            );
            out.push(StyleChange::new(None, self.key, Property::X, self.pos.0));
            out.push(StyleChange::new(None, self.key, Property::Y, self.pos.1));
        }
    }
}

#[derive(Clone, Debug)]
pub struct CustomCursor {
    enabled: bool,
    dot: Follower,
    trail: Follower,
    hovered: HashSet<String>,
}

impl CustomCursor {
    pub fn new(pointer: PointerKind) -> Self {
        Self {
            enabled: pointer == PointerKind::Fine,
            dot: Follower::new(DOT_KEY, 0.1),
            trail: Follower::new(TRAIL_KEY, 0.3),
            hovered: HashSet::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True while the pointer is over at least one interactive element.
    pub fn is_hovering(&self) -> bool {
        !self.hovered.is_empty()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.dot.retarget(x, y);
        self.trail.retarget(x, y);
    }

    pub fn position(&self) -> (f32, f32) {
        self.dot.pos
    }

    pub fn trail_position(&self) -> (f32, f32) {
        self.trail.pos
    }

    pub fn advance(&mut self, dt: f32) -> Vec<StyleChange> {
        let mut out = Vec::new();
        if self.enabled {
            self.dot.advance(dt, &mut out);
            self.trail.advance(dt, &mut out);
        }
        out
    }

    /// Unmount: stop following and forget hover state.
    pub fn detach(&mut self) {
        self.enabled = false;
        self.dot.tween.kill();
        self.trail.tween.kill();
        self.hovered.clear();
    }
}

impl Hoverable for CustomCursor {
    fn on_enter(&mut self, element: &str) {
        if self.enabled {
            self.hovered.insert(element.to_string());
        }
    }

    fn on_leave(&mut self, element: &str) {
        self.hovered.remove(element);
    }
}
