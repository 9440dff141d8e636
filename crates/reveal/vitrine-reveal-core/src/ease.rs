//! Easing curves.
//! - GSAP power family (`none`, `power1..4` × `in|out|inOut`)
//! - CSS `cubic-bezier(x1, y1, x2, y2)` timing via binary search on x
//!
//! Eases serialize as their GSAP/CSS string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RevealError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EaseKind {
    In,
    Out,
    InOut,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// Linear (`none`).
    None,
    /// GSAP `powerN`, N in 1..=4. The curve exponent is N + 1.
    Power(u8, EaseKind),
    CubicBezier([f32; 4]),
}

impl Default for Ease {
    /// GSAP's default tween ease.
    fn default() -> Self {
        Ease::Power(1, EaseKind::Out)
    }
}

#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, [x1, y1, x2, y2]: [f32; 4]) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if x1 == y1 && x2 == y2 {
        return t;
    }
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

impl Ease {
    /// Map linear progress `t` in [0,1] onto the eased curve. Endpoints are exact.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 || t >= 1.0 {
            return t;
        }
        match *self {
            Ease::None => t,
            Ease::Power(n, kind) => {
                let p = i32::from(n.clamp(1, 4)) + 1;
                match kind {
                    EaseKind::In => t.powi(p),
                    EaseKind::Out => 1.0 - (1.0 - t).powi(p),
                    EaseKind::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(p) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(p) / 2.0
                        }
                    }
                }
            }
            Ease::CubicBezier(ctrl) => bezier_ease_t(t, ctrl),
        }
    }
}

impl FromStr for Ease {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "none" || s == "linear" {
            return Ok(Ease::None);
        }
        if let Some(args) = s
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let nums: Vec<f32> = args
                .split(',')
                .map(|p| p.trim().parse::<f32>())
                .collect::<Result<_, _>>()
                .map_err(|_| RevealError::UnknownEase(s.to_string()))?;
            return match nums.as_slice() {
                [x1, y1, x2, y2] if (0.0..=1.0).contains(x1) && (0.0..=1.0).contains(x2) => {
                    Ok(Ease::CubicBezier([*x1, *y1, *x2, *y2]))
                }
                _ => Err(RevealError::UnknownEase(s.to_string())),
            };
        }
        let (family, kind) = match s.split_once('.') {
            Some((f, k)) => (f, k),
            None => (s, "out"),
        };
        let n = match family {
            "power1" | "quad" => 1,
            "power2" | "cubic" => 2,
            "power3" | "quart" => 3,
            "power4" | "quint" => 4,
            _ => return Err(RevealError::UnknownEase(s.to_string())),
        };
        let kind = match kind {
            "in" => EaseKind::In,
            "out" => EaseKind::Out,
            "inOut" => EaseKind::InOut,
            _ => return Err(RevealError::UnknownEase(s.to_string())),
        };
        Ok(Ease::Power(n, kind))
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::None => f.write_str("none"),
            Ease::Power(n, kind) => {
                let k = match kind {
                    EaseKind::In => "in",
                    EaseKind::Out => "out",
                    EaseKind::InOut => "inOut",
                };
                write!(f, "power{n}.{k}")
            }
            Ease::CubicBezier([a, b, c, d]) => write!(f, "cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "left={a} right={b}");
    }

    #[test]
    fn endpoints_are_exact_for_every_curve() {
        for name in ["none", "power1.out", "power2.out", "power3.out", "power4.inOut"] {
            let e: Ease = name.parse().unwrap();
            assert_eq!(e.apply(0.0), 0.0, "{name}");
            assert_eq!(e.apply(1.0), 1.0, "{name}");
        }
        let b: Ease = "cubic-bezier(0.645, 0.045, 0.355, 1)".parse().unwrap();
        assert_eq!(b.apply(0.0), 0.0);
        assert_eq!(b.apply(1.0), 1.0);
    }

    #[test]
    fn power_curves_match_closed_form() {
        let e: Ease = "power2.out".parse().unwrap();
        approx(e.apply(0.5), 1.0 - 0.125);
        let io: Ease = "power4.inOut".parse().unwrap();
        approx(io.apply(0.5), 0.5);
        approx(io.apply(0.25), 0.5f32.powi(5) / 2.0);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let b = Ease::CubicBezier([0.25, 0.25, 0.75, 0.75]);
        approx(b.apply(0.3), 0.3);
    }

    #[test]
    fn serde_uses_string_form() {
        let e: Ease = serde_json::from_str("\"power3.out\"").unwrap();
        assert_eq!(e, Ease::Power(3, EaseKind::Out));
        assert_eq!(serde_json::to_string(&e).unwrap(), "\"power3.out\"");
        assert!(serde_json::from_str::<Ease>("\"bounce.out\"").is_err());
    }
}
