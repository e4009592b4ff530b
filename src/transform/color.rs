//! Sequential color ramps.

use crate::{foundation::core::Rgba, transform::scale::LinearScale};

/// Per-channel linear RGB interpolation (gamma 1). `t` is clamped to `[0, 1]`.
pub fn interpolate_rgb(a: Rgba, b: Rgba, t: f64) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| {
        (f64::from(x) + (f64::from(y) - f64::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgba {
        r: ch(a.r, b.r),
        g: ch(a.g, b.g),
        b: ch(a.b, b.b),
        a: a.a + (b.a - a.a) * t as f32,
    }
}

/// Color in Green's cubehelix space (hue in degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubehelix {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Cubehelix {
    const A: f64 = -0.14861;
    const B: f64 = 1.78277;
    const C: f64 = -0.29227;
    const D: f64 = -0.90649;
    const E: f64 = 1.97294;

    pub fn to_rgb(self) -> Rgba {
        let h = (self.h + 120.0).to_radians();
        let l = self.l;
        let a = self.s * l * (1.0 - l);
        let (sin_h, cos_h) = h.sin_cos();
        let ch = |v: f64| (255.0 * v).round().clamp(0.0, 255.0) as u8;
        Rgba::rgb(
            ch(l + a * (Self::A * cos_h + Self::B * sin_h)),
            ch(l + a * (Self::C * cos_h + Self::D * sin_h)),
            ch(l + a * (Self::E * cos_h)),
        )
    }

    /// Interpolate along the long way round the hue circle.
    pub fn interpolate_long(a: Self, b: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            h: a.h + (b.h - a.h) * t,
            s: a.s + (b.s - a.s) * t,
            l: a.l + (b.l - a.l) * t,
        }
    }
}

/// Interpolator producing a color for `t ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorRamp {
    Rgb { from: Rgba, to: Rgba },
    /// Purple-to-lime cubehelix ramp.
    Cool,
}

impl ColorRamp {
    pub fn at(&self, t: f64) -> Rgba {
        match *self {
            Self::Rgb { from, to } => interpolate_rgb(from, to, t),
            Self::Cool => Cubehelix::interpolate_long(
                Cubehelix {
                    h: 260.0,
                    s: 0.75,
                    l: 0.35,
                },
                Cubehelix {
                    h: 80.0,
                    s: 1.5,
                    l: 0.8,
                },
                t,
            )
            .to_rgb(),
        }
    }
}

/// A ramp keyed by a data domain; values outside the domain take the end colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialColor {
    pub domain: (f64, f64),
    pub ramp: ColorRamp,
}

impl SequentialColor {
    pub fn new(domain: (f64, f64), ramp: ColorRamp) -> Self {
        Self { domain, ramp }
    }

    pub fn at(&self, v: f64) -> Rgba {
        let t = LinearScale::new(self.domain, (0.0, 1.0)).clamped().apply(v);
        self.ramp.at(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/color.rs"]
mod tests;
