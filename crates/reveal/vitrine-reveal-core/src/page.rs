//! Section wiring for the portfolio page.
//!
//! Element keys are the contract with the markup: each section root uses its
//! anchor id (`home`, `about`, ...) and inner nodes use dotted names
//! (`about.image`, `services.cards`).

use crate::ease::{Ease, EaseKind};
use crate::error::RevealError;
use crate::host::ElementHost;
use crate::liveness::Liveness;
use crate::outputs::StyleChange;
use crate::registry::{RevealRegistry, TriggerHandle};
use crate::timeline::{Position, Timeline};
use crate::transition::PageTransition;
use crate::trigger::{ScrollTriggerSpec, TweenSpec};
use crate::value::{Property, VisualState};

pub const REVEAL_START: &str = "top bottom-=100";
pub const SKILLS_START: &str = "top bottom-=150";
pub const SKILL_BAR_SELECTOR: &str = ".skill-bar .progress";
pub const SERVICE_CARD_SELECTOR: &str = ".service-card";

fn shown() -> VisualState {
    VisualState::default()
        .with(Property::X, 0.0)
        .with(Property::Y, 0.0)
        .with(Property::Opacity, 1.0)
}

fn fade_in(target: &str, x: f32, y: f32) -> Result<ScrollTriggerSpec, RevealError> {
    let mut to = shown();
    if x == 0.0 {
        to.x = None;
    }
    if y == 0.0 {
        to.y = None;
    }
    Ok(
        ScrollTriggerSpec::reveal(target, REVEAL_START, VisualState::hidden_offset(x, y), to)?
            .with_tween(TweenSpec::new(0.8)),
    )
}

/// Every scroll trigger of the page, in mount order.
pub fn page_triggers(host: &dyn ElementHost) -> Result<Vec<ScrollTriggerSpec>, RevealError> {
    let mut specs = Vec::new();

    // Hero background drifts while the hero scrolls out.
    specs.push(
        ScrollTriggerSpec::scrub(
            "home",
            "top top",
            "bottom top",
            VisualState::default().with(Property::BackgroundY, 50.0),
            VisualState::default().with(Property::BackgroundY, 100.0),
        )?
        .with_tween(TweenSpec::default().ease(Ease::None)),
    );

    specs.push(fade_in("portfolio.heading", 0.0, 50.0)?);

    specs.push(
        ScrollTriggerSpec::scrub(
            "about.image",
            "top bottom",
            "bottom top",
            VisualState::default().with(Property::Y, 0.0),
            VisualState::default().with(Property::Y, -50.0),
        )?
        .with_trigger("about"),
    );
    specs.push(fade_in("about.content", 50.0, 0.0)?);

    for bar in host.children("about.skills", SKILL_BAR_SELECTOR) {
        specs.push(
            ScrollTriggerSpec::reveal(
                &bar,
                SKILLS_START,
                VisualState::default().with(Property::Width, 0.0),
                VisualState::default(),
            )?
            .with_trigger("about.skills")
            .with_width_from_data("width")
            .with_tween(TweenSpec::new(1.2).ease(Ease::Power(2, EaseKind::Out))),
        );
    }

    specs.push(fade_in("services.heading", 0.0, 50.0)?);
    specs.push(
        fade_in("services.cards", 0.0, 50.0)?
            .with_children(SERVICE_CARD_SELECTOR)
            .with_tween(TweenSpec::new(0.8).stagger(0.15)),
    );

    specs.push(fade_in("contact.heading", 0.0, 50.0)?);
    specs.push(fade_in("contact.form", -50.0, 0.0)?);
    specs.push(fade_in("contact.social", 50.0, 0.0)?);

    Ok(specs)
}

/// Hero intro sequence, played once on mount.
pub fn hero_intro() -> Timeline {
    let mut tl = Timeline::new(Ease::Power(3, EaseKind::Out));
    let to = VisualState::default()
        .with(Property::Y, 0.0)
        .with(Property::Opacity, 1.0);
    tl.add(
        "home.heading",
        VisualState::hidden_offset(0.0, 100.0),
        to,
        1.2,
        Position::Absolute(0.5),
    );
    tl.add(
        "home.subheading",
        VisualState::hidden_offset(0.0, 50.0),
        to,
        1.0,
        Position::Relative(-0.5),
    );
    tl.add(
        "home.tagline",
        VisualState::hidden_offset(0.0, 30.0),
        to,
        0.8,
        Position::Relative(-0.3),
    );
    tl
}

/// Everything registered for one page mount.
///
/// The intro and transition timelines are tied to the registry session they
/// were mounted in: after `RevealRegistry::dispose_all` or a re-`init`,
/// `advance` produces nothing even if `unmount` was never called.
#[derive(Debug)]
pub struct MountedPage {
    handles: Vec<TriggerHandle>,
    skipped: usize,
    session: Liveness,
    intro: Timeline,
    transition: PageTransition,
}

/// Register all page triggers and start the time-driven sequences.
/// Sections whose elements are missing are skipped, not fatal.
pub fn mount_page(
    registry: &mut RevealRegistry,
    host: &dyn ElementHost,
) -> Result<MountedPage, RevealError> {
    let specs = page_triggers(host)?;
    let total = specs.len();
    let handles: Vec<TriggerHandle> = specs
        .into_iter()
        .filter_map(|spec| registry.register(spec, host))
        .collect();
    let skipped = total - handles.len();
    if skipped > 0 {
        log::warn!("page mounted with {skipped} trigger(s) skipped");
    }
    Ok(MountedPage {
        handles,
        skipped,
        session: registry.session(),
        intro: hero_intro(),
        transition: PageTransition::default(),
    })
}

impl MountedPage {
    pub fn handles(&self) -> &[TriggerHandle] {
        &self.handles
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Advance the intro and transition clocks.
    pub fn advance(&mut self, dt: f32) -> Vec<StyleChange> {
        if !self.session.is_alive() {
            return Vec::new();
        }
        let mut out = self.transition.advance(dt);
        out.extend(self.intro.advance(dt));
        out
    }

    /// Tear down every registration and timeline of this mount.
    pub fn unmount(mut self, registry: &mut RevealRegistry) {
        for handle in &self.handles {
            registry.unregister(handle);
        }
        self.intro.kill();
        self.transition.kill();
        log::debug!("page unmounted ({} trigger(s))", self.handles.len());
    }
}
