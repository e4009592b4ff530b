use kurbo::{BezPath, Circle, Point, Shape};

use crate::fields::LayerFields;
use crate::fields::wave::PRICE_DOMAIN;
use crate::foundation::core::Rgba;
use crate::layers::LayerKind;
use crate::render::paint::{GradientStop, Paint};
use crate::render::plan::{BlendMode, DrawOp, FrameSnapshot, Glow, LayerScene};
use crate::transform::color::{ColorRamp, SequentialColor};
use crate::transform::curve::catmull_rom_path;

const MARKER_RADIUS: f64 = 3.0;
const MARKER_REACH: f64 = 100.0;

/// Marker radius, growing linearly as the pointer comes within reach.
pub fn marker_radius(x: f64, pointer_x: Option<f64>) -> f64 {
    match pointer_x {
        Some(px) if (x - px).abs() < MARKER_REACH => {
            MARKER_RADIUS + (MARKER_REACH - (x - px).abs()) * 0.05
        }
        _ => MARKER_RADIUS,
    }
}

pub fn wave_scene(fields: &LayerFields, snap: &FrameSnapshot) -> LayerScene {
    let mut scene = LayerScene::new(LayerKind::Wave, snap.origin());
    if fields.wave.is_empty() {
        tracing::debug!("wave layer has no points");
        return scene;
    }
    let scale = fields.value_scale;

    let baseline_y = scale.baseline_y();
    let mut baseline = BezPath::new();
    baseline.move_to((0.0, baseline_y));
    baseline.line_to((fields.timeline.total_width(), baseline_y));
    scene.push(DrawOp::stroke(
        baseline,
        1.0,
        Paint::Solid(Rgba::rgba(255, 255, 255, 0.1)),
    ));

    let color = SequentialColor::new(PRICE_DOMAIN, ColorRamp::Cool);
    let points: Vec<Point> = fields
        .wave
        .iter()
        .map(|p| Point::new(p.x, scale.y(p.value)))
        .collect();
    let stops = fields
        .wave
        .iter()
        .map(|p| GradientStop::new(p.x, color.at(p.value)))
        .collect();
    scene.push(DrawOp::Stroke {
        path: catmull_rom_path(&points, 0.5),
        transform: kurbo::Affine::IDENTITY,
        width: 4.0,
        paint: Paint::HorizontalGradient(stops),
        blend: BlendMode::Normal,
        opacity: 1.0,
        glow: Some(Glow {
            color: Rgba::rgb(0x00, 0xce, 0xd1),
            blur: 15.0,
        }),
    });

    let pointer_x = snap.hover.map(|h| h.virtual_x);
    for (p, at) in fields.wave.iter().zip(&points) {
        if !snap.is_visible(p.x) {
            continue;
        }
        let circle = Circle::new(*at, marker_radius(p.x, pointer_x));
        scene.push(DrawOp::fill(
            circle.to_path(0.1),
            Paint::Solid(Rgba::WHITE),
            BlendMode::Normal,
            1.0,
        ));
    }
    scene
}

#[cfg(test)]
#[path = "../../../tests/unit/render/scene/wave.rs"]
mod tests;
