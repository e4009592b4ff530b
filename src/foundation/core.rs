use crate::foundation::error::{DriftlineError, DriftlineResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Size of a drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> DriftlineResult<Self> {
        if width == 0 || height == 0 {
            return Err(DriftlineError::validation("canvas must be at least 1x1"));
        }
        Ok(Self { width, height })
    }

    pub fn byte_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Host window size, read every frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    pub width: f64,
    pub height: f64,
}

impl Window {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Pixel-sized surface for this window, clamped to the rasterizer's u16 limits.
    pub fn canvas(self) -> Canvas {
        Canvas {
            width: (self.width.round() as u32).clamp(1, u32::from(u16::MAX)),
            height: (self.height.round() as u32).clamp(1, u32::from(u16::MAX)),
        }
    }
}

/// Straight (non-premultiplied) RGBA color with float alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> DriftlineResult<Self> {
        let s = hex.strip_prefix('#').unwrap_or(hex);
        if s.len() != 6 || !s.is_ascii() {
            return Err(DriftlineError::validation(format!(
                "expected #rrggbb color, got '{hex}'"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|_| DriftlineError::validation(format!("invalid hex color '{hex}'")))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS `hsla()` with hue in degrees and saturation/lightness in `[0,1]`.
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f32) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let m1 = l * 2.0 - m2;
        let hue = |mut t: f64| {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            let v = if t * 6.0 < 1.0 {
                m1 + (m2 - m1) * t * 6.0
            } else if t * 2.0 < 1.0 {
                m2
            } else if t * 3.0 < 2.0 {
                m1 + (m2 - m1) * (2.0 / 3.0 - t) * 6.0
            } else {
                m1
            };
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: hue(h + 1.0 / 3.0),
            g: hue(h),
            b: hue(h - 1.0 / 3.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_premul(self) -> Rgba8Premul {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, a)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
