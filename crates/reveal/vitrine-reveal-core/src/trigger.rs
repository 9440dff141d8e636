//! Scroll trigger specifications.

use serde::{Deserialize, Serialize};

use crate::ease::Ease;
use crate::error::RevealError;
use crate::threshold::Threshold;
use crate::value::VisualState;

/// How a trigger reacts to its threshold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Play forward on the first entry only; never reverse, never replay.
    OnceForward,
    /// Play forward on entry, reverse on leave; re-triggerable.
    Reversible,
    /// Progress follows scroll position between `start` and `end`.
    Scrubbed,
}

/// Target width of a progress-bar fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetWidth {
    /// Percent.
    Declared(f32),
    /// Read `data-<attr>` from each target at registration (`"85%"`).
    FromData(String),
}

/// Timing for one-shot tweens. Ignored by scrubbed triggers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenSpec {
    /// Seconds.
    pub duration: f32,
    pub ease: Ease,
    /// Seconds before the first target starts moving.
    pub delay: f32,
    /// Extra delay per subsequent target (multi-target triggers).
    pub stagger: f32,
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            duration: 0.5,
            ease: Ease::default(),
            delay: 0.0,
            stagger: 0.0,
        }
    }
}

impl TweenSpec {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

/// One animation binding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollTriggerSpec {
    /// Element key of the animated node.
    pub target: String,
    /// When set, the animated nodes are the target's descendants matching this
    /// selector (e.g. `.service-card`) and `target` only scopes the lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    /// Element governing activation; defaults to `target`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    pub start: Threshold,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Threshold>,
    pub mode: TriggerMode,
    #[serde(default)]
    pub from: VisualState,
    #[serde(default)]
    pub to: VisualState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_width: Option<TargetWidth>,
    #[serde(default)]
    pub tween: TweenSpec,
}

impl ScrollTriggerSpec {
    /// Re-triggerable reveal (`play none none reverse`).
    pub fn reveal(
        target: &str,
        start: &str,
        from: VisualState,
        to: VisualState,
    ) -> Result<Self, RevealError> {
        Ok(Self {
            target: target.to_string(),
            children: None,
            trigger: None,
            start: start.parse()?,
            end: None,
            mode: TriggerMode::Reversible,
            from,
            to,
            to_width: None,
            tween: TweenSpec::default(),
        })
    }

    /// Scroll-scrubbed binding over `[start, end]`.
    pub fn scrub(
        target: &str,
        start: &str,
        end: &str,
        from: VisualState,
        to: VisualState,
    ) -> Result<Self, RevealError> {
        Ok(Self {
            target: target.to_string(),
            children: None,
            trigger: None,
            start: start.parse()?,
            end: Some(end.parse()?),
            mode: TriggerMode::Scrubbed,
            from,
            to,
            to_width: None,
            tween: TweenSpec::default(),
        })
    }

    pub fn once(mut self) -> Self {
        self.mode = TriggerMode::OnceForward;
        self
    }

    pub fn with_trigger(mut self, trigger: &str) -> Self {
        self.trigger = Some(trigger.to_string());
        self
    }

    pub fn with_children(mut self, selector: &str) -> Self {
        self.children = Some(selector.to_string());
        self
    }

    pub fn with_tween(mut self, tween: TweenSpec) -> Self {
        self.tween = tween;
        self
    }

    pub fn with_width_from_data(mut self, attr: &str) -> Self {
        self.to_width = Some(TargetWidth::FromData(attr.to_string()));
        self
    }

    pub fn trigger_key(&self) -> &str {
        self.trigger.as_deref().unwrap_or(&self.target)
    }

    pub fn validate(&self) -> Result<(), RevealError> {
        if self.mode == TriggerMode::Scrubbed && self.end.is_none() {
            return Err(RevealError::MissingEnd(self.target.clone()));
        }
        Ok(())
    }
}

/// Parse a declared width such as `"85%"` or `"85"` into percent.
pub fn parse_width(target: &str, raw: &str) -> Result<f32, RevealError> {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix('%')
        .unwrap_or(trimmed)
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
        .ok_or_else(|| RevealError::InvalidWidth {
            target: target.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Property;

    #[test]
    fn trigger_parses_from_js_shaped_json() {
        let raw = serde_json::json!({
            "target": "about.skills.0",
            "trigger": "about.skills",
            "start": "top bottom-=150",
            "mode": "reversible",
            "from": { "width": 0.0 },
            "to_width": { "from_data": "width" },
            "tween": { "duration": 1.2, "ease": "power2.out" }
        });
        let spec: ScrollTriggerSpec = serde_json::from_value(raw).unwrap();
        assert_eq!(spec.trigger_key(), "about.skills");
        assert_eq!(spec.from.get(Property::Width), Some(0.0));
        assert_eq!(spec.to_width, Some(TargetWidth::FromData("width".into())));
        assert_eq!(spec.tween.duration, 1.2);
        assert_eq!(spec.tween.stagger, 0.0);
    }

    #[test]
    fn scrubbed_without_end_is_rejected() {
        let mut spec = ScrollTriggerSpec::scrub(
            "a",
            "top top",
            "bottom top",
            VisualState::default(),
            VisualState::default(),
        )
        .unwrap();
        spec.end = None;
        assert_eq!(spec.validate(), Err(RevealError::MissingEnd("a".into())));
    }

    #[test]
    fn width_parsing() {
        assert_eq!(parse_width("bar", "85%").unwrap(), 85.0);
        assert_eq!(parse_width("bar", " 90 ").unwrap(), 90.0);
        assert!(parse_width("bar", "wide").is_err());
        assert!(parse_width("bar", "-5%").is_err());
    }
}
