//! Reveal registry: ownership of scroll trigger registrations and the
//! per-frame evaluation pass.
//!
//! Methods:
//! - init / dispose_all (page mount / unmount)
//! - register / unregister (section mount / unmount)
//! - update (one sampling pass per frame), resize (layout resync)
//! - pending_frame (liveness-guarded batches for deferred application)

use crate::config::RevealConfig;
use crate::host::ElementHost;
use crate::ids::{IdAllocator, TriggerId};
use crate::liveness::{FrameCallback, Liveness, PendingFrame};
use crate::outputs::{Outputs, PageState, RevealEvent, StyleChange};
use crate::trigger::{parse_width, ScrollTriggerSpec, TargetWidth, TriggerMode};
use crate::tween::{Direction, Tween};
use crate::value::{interpolate, Property, VisualState};
use crate::viewport::{Rect, Viewport};

/// Handle returned by `register`, used for teardown.
#[derive(Clone, Debug)]
pub struct TriggerHandle {
    id: TriggerId,
    liveness: Liveness,
}

impl TriggerHandle {
    #[inline]
    pub fn id(&self) -> TriggerId {
        self.id
    }

    /// False once the registration was unregistered or disposed.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.liveness.is_alive()
    }
}

/// One animated node of a registration.
#[derive(Debug)]
struct TargetSlot {
    key: String,
    to: VisualState,
    tween: Tween,
}

#[derive(Debug)]
struct Registration {
    id: TriggerId,
    spec: ScrollTriggerSpec,
    trigger_rect: Rect,
    targets: Vec<TargetSlot>,
    liveness: Liveness,
    zone: Zone,
    /// OnceForward: the single forward play already happened.
    fired: bool,
    /// Reversible: last played direction was forward.
    played: bool,
    primed: bool,
    last_scrub: Option<f32>,
    forward_count: u32,
    reverse_count: u32,
}

/// Where the scroll position sits relative to a trigger window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Zone {
    Before,
    Inside,
    After,
}

impl Zone {
    fn of(scroll: f32, start: f32, end: Option<f32>) -> Self {
        if scroll < start {
            Zone::Before
        } else if end.is_some_and(|e| scroll > e) {
            Zone::After
        } else {
            Zone::Inside
        }
    }

    /// Activation edges crossed moving from `self` to `next`, in order.
    /// Jumping over the whole window enters and then leaves it.
    fn edges(self, next: Zone) -> &'static [bool] {
        match (self, next) {
            (a, b) if a == b => &[],
            (Zone::Before, Zone::After) | (Zone::After, Zone::Before) => &[true, false],
            (_, Zone::Inside) => &[true],
            _ => &[false],
        }
    }
}

/// Clamped linear progress of `scroll` through `[start, end]`.
/// A degenerate range acts as a step at `start`.
pub fn scrub_progress(scroll: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span <= 0.0 {
        return if scroll >= start { 1.0 } else { 0.0 };
    }
    ((scroll - start) / span).clamp(0.0, 1.0)
}

impl Registration {
    fn start_end(&self, viewport_height: f32) -> (f32, Option<f32>) {
        let start = self
            .spec
            .start
            .scroll_position(&self.trigger_rect, viewport_height);
        let end = self
            .spec
            .end
            .map(|e| e.scroll_position(&self.trigger_rect, viewport_height));
        (start, end)
    }

    fn emit_state(&self, eased: f32, slot: &TargetSlot, out: &mut Outputs) {
        for (prop, value) in interpolate(&self.spec.from, &slot.to, eased) {
            out.push_change(StyleChange::new(Some(self.id), slot.key.clone(), prop, value));
        }
    }

    fn play(&mut self, direction: Direction, reduced_motion: bool) {
        for slot in &mut self.targets {
            if reduced_motion {
                slot.tween.seek_end(direction);
            } else {
                slot.tween.play(direction);
            }
        }
        match direction {
            Direction::Forward => self.forward_count += 1,
            Direction::Reverse => self.reverse_count += 1,
        }
    }
}

/// Registry of scroll triggers with an explicit page-level lifecycle.
#[derive(Debug)]
pub struct RevealRegistry {
    cfg: RevealConfig,
    ids: IdAllocator,
    entries: Vec<Registration>,
    initialized: bool,
    /// Flipped by `dispose_all`/`init`; page timelines hold a clone.
    session: Liveness,
    viewport: Option<Viewport>,
    outputs: Outputs,
}

impl Default for RevealRegistry {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

impl RevealRegistry {
    /// Create an initialized registry.
    pub fn new(cfg: RevealConfig) -> Self {
        let outputs = Outputs {
            changes: Vec::with_capacity(cfg.max_changes_per_tick),
            ..Outputs::default()
        };
        Self {
            cfg,
            ids: IdAllocator::new(),
            entries: Vec::new(),
            initialized: true,
            session: Liveness::new(),
            viewport: None,
            outputs,
        }
    }

    /// (Re)initialize for a fresh page mount. Any previous registrations are disposed.
    pub fn init(&mut self, cfg: RevealConfig) {
        if !self.entries.is_empty() {
            self.dispose_all();
        }
        self.session.kill();
        self.session = Liveness::new();
        self.cfg = cfg;
        self.viewport = None;
        self.outputs.clear();
        self.initialized = true;
        log::debug!("reveal registry initialized");
    }

    /// Tear down every registration. Further calls are no-ops until `init`.
    pub fn dispose_all(&mut self) {
        for entry in self.entries.drain(..) {
            entry.liveness.kill();
        }
        self.session.kill();
        self.outputs.clear();
        self.initialized = false;
        log::debug!("reveal registry disposed");
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Flag that stays alive until the next `dispose_all` or `init`.
    pub(crate) fn session(&self) -> Liveness {
        self.session.clone()
    }

    pub fn config(&self) -> &RevealConfig {
        &self.cfg
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a trigger. Missing elements or undeclared widths skip the
    /// registration and return `None`; the rest of the page keeps working.
    pub fn register(
        &mut self,
        spec: ScrollTriggerSpec,
        host: &dyn ElementHost,
    ) -> Option<TriggerHandle> {
        if !self.initialized {
            log::warn!("register('{}') after dispose_all; ignored", spec.target);
            return None;
        }
        if let Err(e) = spec.validate() {
            log::warn!("skipping trigger: {e}");
            return None;
        }
        let Some(trigger_rect) = host.rect(spec.trigger_key()) else {
            log::warn!(
                "skipping trigger on '{}': trigger element '{}' not found",
                spec.target,
                spec.trigger_key()
            );
            return None;
        };

        let keys: Vec<String> = match &spec.children {
            Some(selector) => host.children(&spec.target, selector),
            None if host.rect(&spec.target).is_some() => vec![spec.target.clone()],
            None => Vec::new(),
        };
        if keys.is_empty() {
            log::warn!("skipping trigger: no target element for '{}'", spec.target);
            return None;
        }

        let mut targets = Vec::with_capacity(keys.len());
        for (i, key) in keys.into_iter().enumerate() {
            let mut to = spec.to;
            match &spec.to_width {
                Some(TargetWidth::Declared(w)) => to.set(Property::Width, *w),
                Some(TargetWidth::FromData(attr)) => {
                    let Some(raw) = host.data(&key, attr) else {
                        log::warn!("skipping trigger: '{key}' has no data-{attr}");
                        return None;
                    };
                    match parse_width(&key, &raw) {
                        Ok(w) => to.set(Property::Width, w),
                        Err(e) => {
                            log::warn!("skipping trigger: {e}");
                            return None;
                        }
                    }
                }
                None => {}
            }
            let delay = spec.tween.delay + spec.tween.stagger * i as f32;
            let tween = Tween::new(spec.tween.duration, delay, spec.tween.ease);
            targets.push(TargetSlot { key, to, tween });
        }

        let id = self.ids.alloc_trigger();
        let liveness = Liveness::new();
        log::debug!(
            "registered trigger {:?} on '{}' ({:?}, {} target(s))",
            id,
            spec.target,
            spec.mode,
            targets.len()
        );
        self.entries.push(Registration {
            id,
            spec,
            trigger_rect,
            targets,
            liveness: liveness.clone(),
            zone: Zone::Before,
            fired: false,
            played: false,
            primed: false,
            last_scrub: None,
            forward_count: 0,
            reverse_count: 0,
        });
        Some(TriggerHandle { id, liveness })
    }

    /// Remove a registration, cancelling its tweens. Returns false for unknown
    /// or already removed handles.
    pub fn unregister(&mut self, handle: &TriggerHandle) -> bool {
        handle.liveness.kill();
        let Some(pos) = self.entries.iter().position(|e| e.id == handle.id) else {
            return false;
        };
        let entry = self.entries.remove(pos);
        self.outputs.changes.retain(|c| c.trigger != Some(entry.id));
        log::debug!("unregistered trigger {:?} on '{}'", entry.id, entry.spec.target);
        true
    }

    pub fn is_registered(&self, handle: &TriggerHandle) -> bool {
        self.entries.iter().any(|e| e.id == handle.id)
    }

    /// (forward, reverse) play counts since registration.
    pub fn play_counts(&self, handle: &TriggerHandle) -> Option<(u32, u32)> {
        self.entries
            .iter()
            .find(|e| e.id == handle.id)
            .map(|e| (e.forward_count, e.reverse_count))
    }

    /// Whether any tween of the registration is mid-flight.
    pub fn is_animating(&self, handle: &TriggerHandle) -> bool {
        self.entries
            .iter()
            .find(|e| e.id == handle.id)
            .is_some_and(|e| e.targets.iter().any(|t| t.tween.is_running()))
    }

    /// Recompute cached layout after a viewport size change. Elements that
    /// disappeared keep their previous rect.
    pub fn resize(&mut self, viewport: Viewport, host: &dyn ElementHost) {
        self.viewport = Some(viewport);
        for entry in &mut self.entries {
            match host.rect(entry.spec.trigger_key()) {
                Some(rect) => entry.trigger_rect = rect,
                None => log::warn!(
                    "resize: trigger element '{}' vanished; keeping cached layout",
                    entry.spec.trigger_key()
                ),
            }
            entry.last_scrub = None;
        }
    }

    /// One evaluation pass against a single viewport snapshot, advancing
    /// tweens by `dt` seconds.
    pub fn update(&mut self, viewport: Viewport, dt: f32) -> &Outputs {
        self.outputs.clear();
        if !self.initialized {
            return &self.outputs;
        }
        self.viewport = Some(viewport);
        self.outputs.page = PageState {
            progress_percent: viewport.progress_percent(),
            nav_scrolled: viewport.scroll_y > self.cfg.nav_scrolled_threshold,
        };

        let scroll = viewport.scroll_y;
        let reduced = self.cfg.reduced_motion;
        let emit_events = self.cfg.emit_events;
        let out = &mut self.outputs;

        for entry in &mut self.entries {
            let (start, end) = entry.start_end(viewport.height);

            if entry.spec.mode == TriggerMode::Scrubbed {
                let progress = scrub_progress(scroll, start, end.unwrap_or(start));
                if entry.last_scrub != Some(progress) {
                    entry.last_scrub = Some(progress);
                    for slot in &entry.targets {
                        entry.emit_state(progress, slot, out);
                    }
                }
                continue;
            }

            let zone = Zone::of(scroll, start, end);
            let edges = entry.zone.edges(zone);
            entry.zone = zone;
            let mut snapped = false;
            for &active in edges {
                if emit_events {
                    out.push_event(if active {
                        RevealEvent::Entered { trigger: entry.id }
                    } else {
                        RevealEvent::Left { trigger: entry.id }
                    });
                }
                let direction = match (entry.spec.mode, active) {
                    (TriggerMode::OnceForward, true) if !entry.fired => {
                        entry.fired = true;
                        Some(Direction::Forward)
                    }
                    (TriggerMode::Reversible, true) if !entry.played => {
                        entry.played = true;
                        Some(Direction::Forward)
                    }
                    (TriggerMode::Reversible, false) if entry.played => {
                        entry.played = false;
                        Some(Direction::Reverse)
                    }
                    _ => None,
                };
                let Some(direction) = direction else {
                    continue;
                };
                entry.play(direction, reduced);
                if emit_events {
                    out.push_event(RevealEvent::Played {
                        trigger: entry.id,
                        direction,
                    });
                }
                if reduced {
                    let eased = match direction {
                        Direction::Forward => 1.0,
                        Direction::Reverse => 0.0,
                    };
                    for slot in &entry.targets {
                        entry.emit_state(eased, slot, out);
                    }
                    snapped = true;
                }
            }
            if snapped {
                entry.primed = true;
                continue;
            }

            let priming = !entry.primed;
            entry.primed = true;
            let mut finished = None;
            for i in 0..entry.targets.len() {
                match entry.targets[i].tween.advance(dt) {
                    Some(step) => {
                        entry.emit_state(step.eased, &entry.targets[i], out);
                        if step.completed && entry.targets.iter().all(|t| !t.tween.is_running()) {
                            finished = Some(entry.targets[i].tween.direction());
                        }
                    }
                    // First pass renders the from-state of idle or delayed targets.
                    None if priming => {
                        let slot = &entry.targets[i];
                        entry.emit_state(slot.tween.eased(), slot, out);
                    }
                    None => {}
                }
            }
            if let (Some(direction), true) = (finished, emit_events) {
                out.push_event(RevealEvent::Completed {
                    trigger: entry.id,
                    direction,
                });
            }
        }

        &self.outputs
    }

    /// Outputs of the last `update`.
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Package the last update's changes per registration, guarded by each
    /// registration's liveness flag, for hosts that apply styles later.
    pub fn pending_frame(&self) -> PendingFrame {
        let mut callbacks = Vec::new();
        for entry in &self.entries {
            let changes: Vec<StyleChange> = self
                .outputs
                .changes
                .iter()
                .filter(|c| c.trigger == Some(entry.id))
                .cloned()
                .collect();
            if !changes.is_empty() {
                callbacks.push(FrameCallback::new(entry.liveness.clone(), changes));
            }
        }
        PendingFrame { callbacks }
    }

    /// Last sampled viewport, if any.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}
