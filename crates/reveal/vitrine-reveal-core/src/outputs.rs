//! Output contracts from the reveal registry.
//!
//! Outputs carry only the style values that changed this tick, keyed by the
//! host's element key, plus page-level state and semantic events. Adapters
//! apply the changes and forward events.

use serde::{Deserialize, Serialize};

use crate::ids::TriggerId;
use crate::tween::Direction;
use crate::value::Property;

/// One property value to write on one element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleChange {
    /// Owning registration; `None` for timeline/controller output.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trigger: Option<TriggerId>,
    pub target: String,
    pub property: Property,
    pub value: f32,
}

impl StyleChange {
    pub fn new(
        trigger: Option<TriggerId>,
        target: impl Into<String>,
        property: Property,
        value: f32,
    ) -> Self {
        Self {
            trigger,
            target: target.into(),
            property,
            value,
        }
    }

    /// Value formatted with its CSS unit (`"25px"`, `"85%"`, `"0.5"`).
    pub fn css_value(&self) -> String {
        format!("{}{}", self.value, self.property.unit())
    }
}

/// Page-level state derived from the scroll position alone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    /// Width of the top scroll progress bar, percent.
    pub progress_percent: f32,
    /// Navbar switches to its compact background.
    pub nav_scrolled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum RevealEvent {
    Entered {
        trigger: TriggerId,
    },
    Left {
        trigger: TriggerId,
    },
    Played {
        trigger: TriggerId,
        direction: Direction,
    },
    Completed {
        trigger: TriggerId,
        direction: Direction,
    },
}

/// Outputs returned by `RevealRegistry::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<StyleChange>,
    #[serde(default)]
    pub events: Vec<RevealEvent>,
    #[serde(default)]
    pub page: PageState,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
        self.page = PageState::default();
    }

    #[inline]
    pub fn push_change(&mut self, change: StyleChange) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: RevealEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Last value written to `target.property` this tick, if any.
    pub fn value_of(&self, target: &str, property: Property) -> Option<f32> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.target == target && c.property == property)
            .map(|c| c.value)
    }
}
