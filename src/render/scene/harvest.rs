use kurbo::BezPath;

use crate::fields::LayerFields;
use crate::fields::harvest::{BarLayout, HarvestBar};
use crate::foundation::core::Rgba;
use crate::layers::LayerKind;
use crate::render::paint::{GradientStop, Paint};
use crate::render::plan::{BlendMode, DrawOp, FrameSnapshot, LayerScene};

const RIBBON_WIDTH: f64 = 20.0;
const EDGE_STEP: f64 = 5.0;
const MAX_SWAY: f64 = 6.0;

pub fn harvest_scene(fields: &LayerFields, snap: &FrameSnapshot) -> LayerScene {
    let mut scene = LayerScene::new(LayerKind::Harvest, snap.origin());
    scene
        .ops
        .extend(ribbon_ops(&fields.harvest, &fields.bar_layout, snap));
    scene
}

/// Swaying ribbons over every visible bar of an externally laid-out bar chart.
pub fn ribbon_ops(
    bars: &[HarvestBar],
    layout: &dyn BarLayout,
    snap: &FrameSnapshot,
) -> Vec<DrawOp> {
    let bottom = layout.baseline_y();
    let mut ops = Vec::new();
    for bar in bars.iter().filter(|b| snap.is_visible(b.x)) {
        let top = layout.pixel_for_value(bar.value);
        if bottom - top < 0.5 {
            continue;
        }
        let path = ribbon_path(bar.x, bottom, top, snap.ribbon_time, bar.index);
        ops.push(DrawOp::fill(
            path.clone(),
            Paint::VerticalGradient(vec![
                GradientStop::new(top, Rgba::from_hsla(120.0, 0.9, 0.75, 0.5)),
                GradientStop::new(bottom, Rgba::from_hsla(120.0, 0.9, 0.4, 0.85)),
            ]),
            BlendMode::Normal,
            1.0,
        ));
        ops.push(DrawOp::stroke(
            path,
            1.0,
            Paint::Solid(Rgba::from_hsla(120.0, 1.0, 0.8, 0.4)),
        ));
    }
    ops
}

/// Horizontal sway of a ribbon edge at `y`; zero at the base, full at the top.
pub fn sway(y: f64, bottom: f64, top: f64, ribbon_time: f64, index: usize) -> f64 {
    let phase = y * 0.015 + ribbon_time * 0.7 + index as f64 * 0.5;
    phase.sin() * ((bottom - y) / (bottom - top) * MAX_SWAY)
}

/// Closed ribbon outline: left edge upward, rounded cap, right edge downward.
pub fn ribbon_path(cx: f64, bottom: f64, top: f64, ribbon_time: f64, index: usize) -> BezPath {
    let half = RIBBON_WIDTH / 2.0;
    let mut path = BezPath::new();

    let mut y = bottom;
    let mut first = true;
    while y >= top {
        let p = (cx - half + sway(y, bottom, top, ribbon_time, index), y);
        if first {
            path.move_to(p);
            first = false;
        } else {
            path.line_to(p);
        }
        y -= EDGE_STEP;
    }

    let cap = (top * 0.015 + ribbon_time * 0.7 + index as f64 * 0.5).sin() * MAX_SWAY;
    path.quad_to((cx + cap, top - 10.0), (cx + half + cap, top));

    let mut y = top;
    while y <= bottom {
        path.line_to((cx + half + sway(y, bottom, top, ribbon_time, index), y));
        y += EDGE_STEP;
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../../tests/unit/render/scene/harvest.rs"]
mod tests;
