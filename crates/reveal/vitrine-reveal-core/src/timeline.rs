//! Time-driven timelines (intro sequences, page transition).
//!
//! Entries are placed with GSAP position parameters relative to the previous
//! entry and sampled from a single timeline clock, so overlapping entries
//! (`"-=0.5"`) animate concurrently.

use std::str::FromStr;

use crate::ease::Ease;
use crate::error::RevealError;
use crate::outputs::StyleChange;
use crate::value::{interpolate, VisualState};

/// Placement of an entry on the timeline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Position {
    /// `">"`: when the previous entry ends (default).
    AfterPrevious,
    /// `"<"`: when the previous entry starts.
    WithPrevious,
    /// `"+=x"` / `"-=x"`: offset from the previous entry's end, seconds.
    Relative(f32),
    /// Absolute time, seconds.
    Absolute(f32),
}

impl FromStr for Position {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || RevealError::InvalidPosition(s.to_string());
        match s {
            "" | ">" => Ok(Position::AfterPrevious),
            "<" => Ok(Position::WithPrevious),
            _ => {
                if let Some(v) = s.strip_prefix("+=") {
                    v.parse().map(Position::Relative).map_err(|_| bad())
                } else if let Some(v) = s.strip_prefix("-=") {
                    v.parse::<f32>()
                        .map(|v| Position::Relative(-v))
                        .map_err(|_| bad())
                } else {
                    s.parse::<f32>()
                        .ok()
                        .filter(|v| *v >= 0.0)
                        .map(Position::Absolute)
                        .ok_or_else(bad)
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    target: String,
    from: VisualState,
    to: VisualState,
    start: f32,
    duration: f32,
    last: Option<f32>,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    default_ease: Ease,
    entries: Vec<Entry>,
    time: f32,
    killed: bool,
}

impl Timeline {
    pub fn new(default_ease: Ease) -> Self {
        Self {
            default_ease,
            entries: Vec::new(),
            time: 0.0,
            killed: false,
        }
    }

    fn resolve(&self, position: Position) -> f32 {
        let (prev_start, prev_end) = self
            .entries
            .last()
            .map(|e| (e.start, e.start + e.duration))
            .unwrap_or((0.0, 0.0));
        let t = match position {
            Position::AfterPrevious => prev_end,
            Position::WithPrevious => prev_start,
            Position::Relative(dt) => prev_end + dt,
            Position::Absolute(t) => t,
        };
        t.max(0.0)
    }

    /// Append a from→to entry using the timeline's default ease.
    pub fn add(
        &mut self,
        target: &str,
        from: VisualState,
        to: VisualState,
        duration: f32,
        position: Position,
    ) -> &mut Self {
        let start = self.resolve(position);
        self.entries.push(Entry {
            target: target.to_string(),
            from,
            to,
            start,
            duration: duration.max(0.0),
            last: None,
        });
        self
    }

    /// End time of the last-finishing entry, seconds.
    pub fn total_duration(&self) -> f32 {
        self.entries
            .iter()
            .map(|e| e.start + e.duration)
            .fold(0.0, f32::max)
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_complete(&self) -> bool {
        self.killed || self.entries.iter().all(|e| e.last == Some(1.0))
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }

    /// Stop producing output. Irreversible.
    pub fn kill(&mut self) {
        self.killed = true;
    }

    /// Advance the clock and return the changes for entries whose eased
    /// progress moved. The first call also emits every entry's from-state.
    pub fn advance(&mut self, dt: f32) -> Vec<StyleChange> {
        let mut out = Vec::new();
        if self.killed {
            return out;
        }
        self.time += dt.max(0.0);
        for e in &mut self.entries {
            let linear = if e.duration <= 0.0 {
                if self.time >= e.start {
                    1.0
                } else {
                    0.0
                }
            } else {
                ((self.time - e.start) / e.duration).clamp(0.0, 1.0)
            };
            if e.last == Some(linear) {
                continue;
            }
            e.last = Some(linear);
            let eased = self.default_ease.apply(linear);
            for (prop, value) in interpolate(&e.from, &e.to, eased) {
                out.push(StyleChange::new(None, e.target.clone(), prop, value));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Property;

    fn fade_up(y: f32) -> (VisualState, VisualState) {
        (
            VisualState::hidden_offset(0.0, y),
            VisualState::default()
                .with(Property::Y, 0.0)
                .with(Property::Opacity, 1.0),
        )
    }

    #[test]
    fn positions_parse() {
        assert_eq!(">".parse::<Position>().unwrap(), Position::AfterPrevious);
        assert_eq!("-=0.5".parse::<Position>().unwrap(), Position::Relative(-0.5));
        assert_eq!("+=0.2".parse::<Position>().unwrap(), Position::Relative(0.2));
        assert_eq!("1.5".parse::<Position>().unwrap(), Position::Absolute(1.5));
        assert!("soon".parse::<Position>().is_err());
    }

    #[test]
    fn overlapping_entries_are_placed_relative_to_previous_end() {
        let mut tl = Timeline::new(Ease::None);
        let (f, t) = fade_up(100.0);
        tl.add("h", f, t, 1.2, Position::Absolute(0.5));
        tl.add("s", f, t, 1.0, Position::Relative(-0.5));
        tl.add("t", f, t, 0.8, Position::Relative(-0.3));
        // 0.5 + 1.2 = 1.7; 1.7 - 0.5 = 1.2 → ends 2.2; 2.2 - 0.3 = 1.9 → ends 2.7
        assert!((tl.total_duration() - 2.7).abs() < 1e-5);
    }

    #[test]
    fn first_advance_renders_from_state_and_kill_silences() {
        let mut tl = Timeline::new(Ease::None);
        let (f, t) = fade_up(30.0);
        tl.add("tagline", f, t, 1.0, Position::Absolute(1.0));
        let first = tl.advance(0.0);
        assert!(first
            .iter()
            .any(|c| c.property == Property::Opacity && c.value == 0.0));
        assert!(tl.advance(0.5).is_empty());
        let mid = tl.advance(1.0);
        assert!(mid
            .iter()
            .any(|c| c.property == Property::Y && (c.value - 15.0).abs() < 1e-4));
        tl.kill();
        assert!(tl.advance(1.0).is_empty());
        assert!(tl.is_complete());
    }
}
