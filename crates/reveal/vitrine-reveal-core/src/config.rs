//! Reveal registry configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the reveal registry and page-level controllers.
/// Every field has a default matching the production page; hosts usually pass
/// `{}` or override one or two values.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Scroll offset (px) past which the navbar switches to its compact style.
    pub nav_scrolled_threshold: f32,
    /// Delay (ms) between an anchor click and the smooth scroll request.
    pub smooth_scroll_delay_ms: f32,
    /// Collapse one-shot tweens to their end state (prefers-reduced-motion).
    pub reduced_motion: bool,
    /// Emit `RevealEvent`s alongside style changes.
    pub emit_events: bool,
    /// Capacity hint for the per-frame change buffer.
    pub max_changes_per_tick: usize,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            nav_scrolled_threshold: 50.0,
            smooth_scroll_delay_ms: 100.0,
            reduced_motion: false,
            emit_events: true,
            max_changes_per_tick: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: RevealConfig = serde_json::from_str(r#"{ "reduced_motion": true }"#).unwrap();
        assert!(cfg.reduced_motion);
        assert_eq!(cfg.nav_scrolled_threshold, 50.0);
        assert_eq!(cfg.smooth_scroll_delay_ms, 100.0);
    }
}
