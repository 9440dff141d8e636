//! Visual property sets and interpolation between them.

use serde::{Deserialize, Serialize};

/// One animatable style property. Units are fixed per property so the host can
/// format CSS without extra metadata.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// translateX, px
    X,
    /// translateY, px
    Y,
    Opacity,
    Scale,
    ScaleY,
    /// width, percent
    Width,
    /// background-position-y, percent
    BackgroundY,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::X,
        Property::Y,
        Property::Opacity,
        Property::Scale,
        Property::ScaleY,
        Property::Width,
        Property::BackgroundY,
    ];

    /// Unit suffix for CSS output.
    pub fn unit(&self) -> &'static str {
        match self {
            Property::X | Property::Y => "px",
            Property::Width | Property::BackgroundY => "%",
            Property::Opacity | Property::Scale | Property::ScaleY => "",
        }
    }

    /// Value the property has when a state leaves it unspecified.
    pub fn neutral(&self) -> f32 {
        match self {
            Property::X | Property::Y => 0.0,
            Property::Opacity | Property::Scale | Property::ScaleY => 1.0,
            Property::Width => 0.0,
            Property::BackgroundY => 50.0,
        }
    }
}

/// Named visual property set (`fromState` / `toState`).
/// Unset properties are not animated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_y: Option<f32>,
}

impl VisualState {
    pub fn get(&self, prop: Property) -> Option<f32> {
        match prop {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
            Property::ScaleY => self.scale_y,
            Property::Width => self.width,
            Property::BackgroundY => self.background_y,
        }
    }

    pub fn set(&mut self, prop: Property, value: f32) {
        let slot = match prop {
            Property::X => &mut self.x,
            Property::Y => &mut self.y,
            Property::Opacity => &mut self.opacity,
            Property::Scale => &mut self.scale,
            Property::ScaleY => &mut self.scale_y,
            Property::Width => &mut self.width,
            Property::BackgroundY => &mut self.background_y,
        };
        *slot = Some(value);
    }

    pub fn with(mut self, prop: Property, value: f32) -> Self {
        self.set(prop, value);
        self
    }

    /// Fade-in-from-offset state used by most section reveals.
    pub fn hidden_offset(x: f32, y: f32) -> Self {
        let mut s = Self::default().with(Property::Opacity, 0.0);
        if x != 0.0 {
            s.set(Property::X, x);
        }
        if y != 0.0 {
            s.set(Property::Y, y);
        }
        s
    }

    pub fn is_empty(&self) -> bool {
        Property::ALL.iter().all(|p| self.get(*p).is_none())
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate every property set on either side. A property present on only
/// one side interpolates against its neutral value.
pub fn interpolate(from: &VisualState, to: &VisualState, t: f32) -> Vec<(Property, f32)> {
    let mut out = Vec::with_capacity(4);
    for prop in Property::ALL {
        match (from.get(prop), to.get(prop)) {
            (None, None) => {}
            (a, b) => {
                let a = a.unwrap_or_else(|| prop.neutral());
                let b = b.unwrap_or_else(|| prop.neutral());
                out.push((prop, lerp_f32(a, b, t)));
            }
        }
    }
    out
}
