use serde::{Deserialize, Serialize};

/// Timing knobs for the contact form, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Delay used by the simulated transport before reporting delivery.
    pub dispatch_delay_ms: u32,
    /// Time spent in `Success` before returning to `Idle`.
    pub success_reset_ms: u32,
    /// Treat whitespace-only values as empty when validating.
    pub trim_required: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            dispatch_delay_ms: 1500,
            success_reset_ms: 3000,
            trim_required: true,
        }
    }
}
