//! Paint sources evaluated per pixel in op-local coordinates.

use kurbo::{Point, Vec2};

use crate::foundation::core::Rgba;
use crate::transform::color::interpolate_rgb;

/// A color stop at an absolute coordinate along the gradient axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    pub at: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(at: f64, color: Rgba) -> Self {
        Self { at, color }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid(Rgba),
    /// Stops along x, sorted ascending; padded beyond the ends.
    HorizontalGradient(Vec<GradientStop>),
    /// Stops along y, sorted ascending; padded beyond the ends.
    VerticalGradient(Vec<GradientStop>),
    /// Two-circle gradient from `(c0, r0)` to `(c1, r1)`.
    Radial {
        c0: Point,
        r0: f64,
        c1: Point,
        r1: f64,
        inner: Rgba,
        outer: Rgba,
    },
}

impl Paint {
    /// Straight color at `p`. Radial points outside every circle are transparent.
    pub fn color_at(&self, p: Point) -> Rgba {
        match self {
            Self::Solid(c) => *c,
            Self::HorizontalGradient(stops) => sample_stops(stops, p.x),
            Self::VerticalGradient(stops) => sample_stops(stops, p.y),
            Self::Radial {
                c0,
                r0,
                c1,
                r1,
                inner,
                outer,
            } => match radial_t(p, *c0, *r0, *c1, *r1) {
                Some(t) => interpolate_rgb(*inner, *outer, t.clamp(0.0, 1.0)),
                None => Rgba::TRANSPARENT,
            },
        }
    }
}

fn sample_stops(stops: &[GradientStop], v: f64) -> Rgba {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::TRANSPARENT;
    };
    if v <= first.at {
        return first.color;
    }
    if v >= last.at {
        return last.color;
    }
    let i = stops.partition_point(|s| s.at <= v);
    let (a, b) = (stops[i - 1], stops[i]);
    let span = b.at - a.at;
    if span <= 0.0 {
        return b.color;
    }
    interpolate_rgb(a.color, b.color, (v - a.at) / span)
}

/// Largest `t` for which `p` lies on the circle interpolated between the two circles with a
/// non-negative radius.
fn radial_t(p: Point, c0: Point, r0: f64, c1: Point, r1: f64) -> Option<f64> {
    let cd: Vec2 = c1 - c0;
    let pd: Vec2 = p - c0;
    let dr = r1 - r0;
    let a = cd.dot(cd) - dr * dr;
    let b = pd.dot(cd) + r0 * dr;
    let c = pd.dot(pd) - r0 * r0;
    let radius_ok = |t: f64| r0 + t * dr >= 0.0;

    if a.abs() < 1e-9 {
        if b.abs() < 1e-12 {
            return None;
        }
        let t = c / (2.0 * b);
        return radius_ok(t).then_some(t);
    }
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let (t1, t2) = ((b + root) / a, (b - root) / a);
    let (hi, lo) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };
    if radius_ok(hi) {
        Some(hi)
    } else if radius_ok(lo) {
        Some(lo)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
