use kurbo::{Affine, BezPath, Point, Rect};

use crate::assets::sprite::SpriteKind;
use crate::fields::LayerFields;
use crate::fields::dense::DenseSample;
use crate::foundation::core::Rgba;
use crate::interaction::indicator::Facing;
use crate::layers::LayerKind;
use crate::render::paint::{GradientStop, Paint};
use crate::render::plan::{BlendMode, DrawOp, FrameSnapshot, LayerScene};
use crate::transform::color::interpolate_rgb;
use crate::transform::curve::basis_path;

const TYPHOON: Rgba = Rgba::rgb(0x00, 0x00, 0x30);
const RAIN_LOW: Rgba = Rgba::rgb(0x00, 0xce, 0xd1);
const RAIN_HIGH: Rgba = Rgba::rgb(0x7f, 0xff, 0xd4);
const SEA: Rgba = Rgba::rgb(0x00, 0x69, 0x94);

const INDICATOR_WIDTH: f64 = 100.0;

/// One of the three stacked flow passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPass {
    Event,
    Precipitation,
    Temperature,
}

impl FlowPass {
    pub const ORDER: [FlowPass; 3] = [Self::Event, Self::Precipitation, Self::Temperature];

    fn amplitude(self, s: &DenseSample) -> f64 {
        match self {
            Self::Event => s.event_amplitude,
            Self::Precipitation => s.precipitation_amplitude,
            Self::Temperature => s.temperature_amplitude,
        }
    }

    /// Procedural ripple added to the pass's surface.
    pub fn offset(self, t: f64, time: f64) -> f64 {
        match self {
            Self::Event => (t * 5.0 + time * 0.5).sin() * 10.0,
            Self::Precipitation => (t * 12.0 + time).sin() * 5.0,
            Self::Temperature => (t * 15.0 - time * 1.5).sin() * 3.0,
        }
    }

    pub fn blend(self) -> BlendMode {
        match self {
            Self::Event => BlendMode::Normal,
            Self::Precipitation => BlendMode::Multiply,
            Self::Temperature => BlendMode::HardLight,
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            Self::Event => 0.6,
            Self::Precipitation => 0.5,
            Self::Temperature => 0.7,
        }
    }

    fn paint(self, samples: &[DenseSample]) -> Paint {
        match self {
            Self::Event => Paint::Solid(TYPHOON),
            Self::Temperature => Paint::Solid(SEA),
            Self::Precipitation => Paint::HorizontalGradient(
                samples
                    .iter()
                    .map(|s| GradientStop::new(s.x, rain_color(s.raw_precip)))
                    .collect(),
            ),
        }
    }
}

/// Rain tint: flat below the heavy-rain threshold, ramped over `[0, 200]` mm above it.
pub fn rain_color(raw_precip: f64) -> Rgba {
    if raw_precip > 100.0 {
        interpolate_rgb(RAIN_LOW, RAIN_HIGH, raw_precip / 200.0)
    } else {
        RAIN_LOW
    }
}

/// Upper edge of a pass at one dense sample.
pub fn surface_top(pass: FlowPass, s: &DenseSample, snap: &FrameSnapshot) -> f64 {
    let scale = snap.lens.scale(s.x);
    snap.base_center_y + s.base_flow * scale + pass.offset(s.t, snap.time)
        - (15.0 + pass.amplitude(s) * scale)
}

fn pass_region(pass: FlowPass, samples: &[DenseSample], snap: &FrameSnapshot) -> BezPath {
    let top: Vec<Point> = samples
        .iter()
        .map(|s| Point::new(s.x, surface_top(pass, s, snap)))
        .collect();
    let mut path = basis_path(&top);
    if let (Some(first), Some(last)) = (top.first(), top.last()) {
        path.line_to((last.x, snap.height));
        path.line_to((first.x, snap.height));
        path.close_path();
    }
    path
}

pub fn weather_scene(fields: &LayerFields, snap: &FrameSnapshot) -> LayerScene {
    let mut scene = LayerScene::new(LayerKind::Weather, snap.origin());
    let samples = fields.dense.samples();
    if samples.len() < 2 {
        tracing::debug!("weather layer has no dense samples");
        return scene;
    }

    for pass in FlowPass::ORDER {
        scene.push(DrawOp::fill(
            pass_region(pass, samples, snap),
            pass.paint(samples),
            pass.blend(),
            pass.opacity(),
        ));
    }

    if let Some(indicator) = snap.indicator {
        match snap.sprites.indicator_aspect {
            Some(aspect) => {
                let sample = fields.dense.sample_at_x(indicator.x);
                let mut transform = Affine::translate((indicator.x, indicator.y));
                if indicator.facing == Facing::Left {
                    transform *= Affine::scale_non_uniform(-1.0, 1.0);
                }
                scene.ops.extend(indicator_ops(transform, aspect, sample.raw_temp));
            }
            None => tracing::debug!("indicator sprite not decoded yet"),
        }
    }
    scene
}

/// Searchlight color keyed by the temperature under the sprite.
pub fn searchlight_color(raw_temp: f64) -> Rgba {
    if raw_temp > 25.0 {
        Rgba::rgba(255, 69, 0, 0.7)
    } else if raw_temp < 5.0 {
        Rgba::rgba(138, 43, 226, 0.7)
    } else {
        Rgba::rgba(224, 255, 255, 0.5)
    }
}

/// Sprite plus its forward light wedge, in sprite-local space (nose toward +x).
fn indicator_ops(transform: Affine, aspect: f64, raw_temp: f64) -> [DrawOp; 2] {
    let w = INDICATOR_WIDTH;
    let h = w * aspect;
    let sprite = DrawOp::Sprite {
        sprite: SpriteKind::Indicator,
        dest: Rect::new(-w / 2.0, -h / 2.0, w / 2.0, h / 2.0),
        transform,
        opacity: 1.0,
        tint: None,
    };

    let mut wedge = BezPath::new();
    wedge.move_to((w / 3.0, -10.0));
    wedge.line_to((w + 150.0, -60.0));
    wedge.line_to((w + 150.0, 60.0));
    wedge.line_to((w / 3.0, 10.0));
    wedge.close_path();
    let light = DrawOp::Fill {
        path: wedge,
        transform,
        paint: Paint::Radial {
            c0: Point::new(w / 2.0, 0.0),
            r0: 5.0,
            c1: Point::new(w / 2.0 + 100.0, 0.0),
            r1: 150.0,
            inner: searchlight_color(raw_temp),
            outer: Rgba::rgba(255, 255, 255, 0.0),
        },
        blend: BlendMode::Screen,
        opacity: 1.0,
    };
    [sprite, light]
}

#[cfg(test)]
#[path = "../../../tests/unit/render/scene/weather.rs"]
mod tests;
