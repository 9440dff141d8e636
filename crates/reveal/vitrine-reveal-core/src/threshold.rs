//! Start/end thresholds in GSAP ScrollTrigger notation.
//!
//! A threshold is two anchors, `"<element> <viewport>"`, e.g. `"top bottom-=100"`:
//! the trigger fires when the element's top edge meets the point 100px above the
//! viewport's bottom edge. Each anchor is an edge keyword (`top`, `center`,
//! `bottom`), a percentage (`80%`) or a pixel offset (`120px`), optionally
//! followed by a relative adjustment (`+=N` / `-=N`, in px).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RevealError;
use crate::viewport::Rect;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    /// Fraction of the extent (0.8 for `80%`).
    Fraction(f32),
    Px(f32),
}

impl Edge {
    #[inline]
    fn resolve(self, extent: f32) -> f32 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => extent * 0.5,
            Edge::Bottom => extent,
            Edge::Fraction(f) => extent * f,
            Edge::Px(px) => px,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    /// Relative adjustment in px (`-=100` → -100).
    pub offset: f32,
}

impl Anchor {
    pub fn new(edge: Edge) -> Self {
        Self { edge, offset: 0.0 }
    }

    /// Position of the anchor within an extent starting at 0.
    #[inline]
    pub fn resolve(&self, extent: f32) -> f32 {
        self.edge.resolve(extent) + self.offset
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Threshold {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl Threshold {
    /// Absolute scroll offset at which the element anchor meets the viewport anchor.
    pub fn scroll_position(&self, rect: &Rect, viewport_height: f32) -> f32 {
        rect.top + self.element.resolve(rect.height) - self.viewport.resolve(viewport_height)
    }
}

fn invalid(input: &str, reason: &str) -> RevealError {
    RevealError::InvalidThreshold {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_edge(token: &str, whole: &str) -> Result<Edge, RevealError> {
    match token {
        "top" | "left" => Ok(Edge::Top),
        "center" => Ok(Edge::Center),
        "bottom" | "right" => Ok(Edge::Bottom),
        t if t.ends_with('%') => t[..t.len() - 1]
            .parse::<f32>()
            .map(|p| Edge::Fraction(p / 100.0))
            .map_err(|_| invalid(whole, "bad percentage")),
        t => t
            .strip_suffix("px")
            .unwrap_or(t)
            .parse::<f32>()
            .map(Edge::Px)
            .map_err(|_| invalid(whole, "unknown edge")),
    }
}

fn parse_anchor(token: &str, whole: &str) -> Result<Anchor, RevealError> {
    let split = token.find("+=").or_else(|| token.find("-="));
    let (edge, offset) = match split {
        Some(idx) => {
            let sign = if token[idx..].starts_with('-') { -1.0 } else { 1.0 };
            let amount = token[idx + 2..]
                .trim_end_matches("px")
                .parse::<f32>()
                .map_err(|_| invalid(whole, "bad relative offset"))?;
            (&token[..idx], sign * amount)
        }
        None => (token, 0.0),
    };
    Ok(Anchor {
        edge: parse_edge(edge, whole)?,
        offset,
    })
}

impl FromStr for Threshold {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(el), Some(vp), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid(s, "expected '<element> <viewport>'"));
        };
        Ok(Threshold {
            element: parse_anchor(el, s)?,
            viewport: parse_anchor(vp, s)?,
        })
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.edge {
            Edge::Top => f.write_str("top")?,
            Edge::Center => f.write_str("center")?,
            Edge::Bottom => f.write_str("bottom")?,
            Edge::Fraction(p) => write!(f, "{}%", p * 100.0)?,
            Edge::Px(px) => write!(f, "{px}px")?,
        }
        if self.offset > 0.0 {
            write!(f, "+={}", self.offset)?;
        } else if self.offset < 0.0 {
            write!(f, "-={}", -self.offset)?;
        }
        Ok(())
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

impl TryFrom<String> for Threshold {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Threshold> for String {
    fn from(value: Threshold) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keyword_pairs_with_relative_offset() {
        let t: Threshold = "top bottom-=100".parse().unwrap();
        assert_eq!(t.element, Anchor::new(Edge::Top));
        assert_eq!(t.viewport.edge, Edge::Bottom);
        assert_eq!(t.viewport.offset, -100.0);
        assert_eq!(t.to_string(), "top bottom-=100");
    }

    #[test]
    fn scroll_position_for_reveal_start() {
        // Element top at 1500px, viewport 800px high: "top bottom-=100"
        // fires once the element top reaches y=700 in the viewport.
        let t: Threshold = "top bottom-=100".parse().unwrap();
        let rect = Rect::new(1500.0, 0.0, 100.0, 400.0);
        assert_eq!(t.scroll_position(&rect, 800.0), 800.0);
    }

    #[test]
    fn scroll_position_for_parallax_range() {
        let start: Threshold = "top bottom".parse().unwrap();
        let end: Threshold = "bottom top".parse().unwrap();
        let rect = Rect::new(1000.0, 0.0, 100.0, 600.0);
        assert_eq!(start.scroll_position(&rect, 800.0), 200.0);
        assert_eq!(end.scroll_position(&rect, 800.0), 1600.0);
    }

    #[test]
    fn percentages_and_pixels() {
        let t: Threshold = "center 80%".parse().unwrap();
        let rect = Rect::new(100.0, 0.0, 0.0, 200.0);
        assert_eq!(t.scroll_position(&rect, 1000.0), 100.0 + 100.0 - 800.0);
        let px: Threshold = "top+=20 120px".parse().unwrap();
        assert_eq!(px.scroll_position(&rect, 1000.0), 100.0 + 20.0 - 120.0);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("top".parse::<Threshold>().is_err());
        assert!("top bottom center".parse::<Threshold>().is_err());
        assert!("middle bottom".parse::<Threshold>().is_err());
        assert!("top bottom-=abc".parse::<Threshold>().is_err());
    }
}
