//! Time-driven one-shot tween state.
//!
//! A tween owns only its clock: elapsed time, direction and delay. Property
//! values are derived from the eased progress by the caller, so reversing
//! mid-flight simply flips the direction and continues from the current
//! elapsed time.

use serde::{Deserialize, Serialize};

use crate::ease::Ease;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Reverse,
}

/// Result of advancing a running tween by one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TweenStep {
    /// Eased progress in [0,1] after the tick.
    pub eased: f32,
    /// The tween reached its end (progress 1 forward, 0 reverse) on this tick.
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct Tween {
    duration: f32,
    delay: f32,
    ease: Ease,
    elapsed: f32,
    delay_remaining: f32,
    direction: Direction,
    running: bool,
}

impl Tween {
    pub fn new(duration: f32, delay: f32, ease: Ease) -> Self {
        Self {
            duration: duration.max(0.0),
            delay: delay.max(0.0),
            ease,
            elapsed: 0.0,
            delay_remaining: 0.0,
            direction: Direction::Forward,
            running: false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Linear progress in [0,1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.elapsed > 0.0 { 1.0 } else { 0.0 };
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn eased(&self) -> f32 {
        self.ease.apply(self.progress())
    }

    /// Start (or redirect) playback. A tween already resting at the requested
    /// end is left alone and `false` is returned.
    pub fn play(&mut self, direction: Direction) -> bool {
        let at_end = match direction {
            Direction::Forward => self.elapsed >= self.duration && self.elapsed > 0.0,
            Direction::Reverse => self.elapsed <= 0.0,
        };
        if at_end && !self.running {
            self.direction = direction;
            return false;
        }
        if direction == Direction::Forward && !self.running && self.elapsed <= 0.0 {
            self.delay_remaining = self.delay;
        }
        if direction == Direction::Reverse {
            self.delay_remaining = 0.0;
        }
        self.direction = direction;
        self.running = true;
        true
    }

    /// Stop without touching elapsed time.
    pub fn kill(&mut self) {
        self.running = false;
        self.delay_remaining = 0.0;
    }

    /// Jump to the resting end of `direction`.
    pub fn seek_end(&mut self, direction: Direction) {
        self.kill();
        self.direction = direction;
        self.elapsed = match direction {
            // Zero-length tweens still need a non-zero marker to read as complete.
            Direction::Forward => self.duration.max(f32::EPSILON),
            Direction::Reverse => 0.0,
        };
    }

    /// Advance by `dt` seconds. Returns `None` when nothing changed (idle or
    /// still inside the delay window).
    pub fn advance(&mut self, dt: f32) -> Option<TweenStep> {
        if !self.running {
            return None;
        }
        let mut dt = dt.max(0.0);
        if self.delay_remaining > 0.0 {
            if dt < self.delay_remaining {
                self.delay_remaining -= dt;
                return None;
            }
            dt -= self.delay_remaining;
            self.delay_remaining = 0.0;
        }
        let completed = match self.direction {
            Direction::Forward => {
                self.elapsed += dt;
                if self.elapsed >= self.duration {
                    self.elapsed = self.duration.max(f32::EPSILON);
                    true
                } else {
                    false
                }
            }
            Direction::Reverse => {
                self.elapsed -= dt;
                if self.elapsed <= 0.0 || self.duration <= 0.0 {
                    self.elapsed = 0.0;
                    true
                } else {
                    false
                }
            }
        };
        if completed {
            self.running = false;
        }
        Some(TweenStep {
            eased: self.eased(),
            completed,
        })
    }
}
