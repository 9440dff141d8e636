//! Liveness flags for deferred style application.
//!
//! Every registration owns a [`Liveness`] flag. Changes that a host applies
//! later (e.g. in the next animation frame) are wrapped in a [`FrameCallback`]
//! holding a clone of that flag; once the registration is torn down the
//! callback turns into a no-op.

use std::cell::Cell;
use std::rc::Rc;

use crate::outputs::StyleChange;

#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Irreversible.
    #[inline]
    pub fn kill(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink receiving style mutations (the DOM in the browser, a recorder in tests).
pub trait StyleSink {
    fn apply(&mut self, change: &StyleChange);
}

/// A batch of style changes guarded by the owning registration's liveness.
#[derive(Clone, Debug)]
pub struct FrameCallback {
    liveness: Liveness,
    changes: Vec<StyleChange>,
}

impl FrameCallback {
    pub fn new(liveness: Liveness, changes: Vec<StyleChange>) -> Self {
        Self { liveness, changes }
    }

    pub fn changes(&self) -> &[StyleChange] {
        &self.changes
    }

    /// Apply the batch if its registration is still alive. Returns whether it ran.
    pub fn fire(&self, sink: &mut dyn StyleSink) -> bool {
        if !self.liveness.is_alive() {
            log::debug!(
                "dropping {} deferred change(s) for a torn-down trigger",
                self.changes.len()
            );
            return false;
        }
        for change in &self.changes {
            sink.apply(change);
        }
        true
    }
}

/// All deferred callbacks produced by one update pass.
#[derive(Clone, Debug, Default)]
pub struct PendingFrame {
    pub callbacks: Vec<FrameCallback>,
}

impl PendingFrame {
    /// Fire every callback; returns how many batches were applied.
    pub fn fire(&self, sink: &mut dyn StyleSink) -> usize {
        self.callbacks.iter().filter(|cb| cb.fire(sink)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Property;

    #[derive(Default)]
    struct Recorder(Vec<StyleChange>);

    impl StyleSink for Recorder {
        fn apply(&mut self, change: &StyleChange) {
            self.0.push(change.clone());
        }
    }

    #[test]
    fn killed_flag_suppresses_callback() {
        let live = Liveness::new();
        let cb = FrameCallback::new(
            live.clone(),
            vec![StyleChange::new(None, "hero", Property::Opacity, 1.0)],
        );
        let mut sink = Recorder::default();
        live.kill();
        assert!(!cb.fire(&mut sink));
        assert!(sink.0.is_empty());
    }
}
