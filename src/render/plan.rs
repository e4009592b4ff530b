use std::collections::BTreeMap;

use kurbo::{Affine, BezPath, Point, Rect};

use crate::assets::sprite::{SpriteKind, SpriteSheet};
use crate::foundation::core::{Canvas, Rgba, Window};
use crate::interaction::hover::{Hover, Lens};
use crate::interaction::indicator::Indicator;
use crate::interaction::tooltip::Tooltip;
use crate::layers::{LayerKind, LayerToggles, Presentation};

use super::paint::Paint;

/// How a draw op combines with what is already on its layer.
///
/// `Multiply`, `Screen` and `HardLight` use the separable W3C formulas on unpremultiplied
/// channels. `TintInside` is source-in: the source color replaces the destination only where the
/// destination is covered, keeping the destination's alpha mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    HardLight,
    TintInside,
}

/// Blurred halo drawn under an op, like a canvas shadow with zero offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f64,
}

/// One backend-agnostic drawing command in layer (virtual canvas) coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Fill {
        #[serde(skip)]
        path: BezPath,
        #[serde(skip)]
        transform: Affine,
        paint: Paint,
        blend: BlendMode,
        opacity: f32,
    },
    Stroke {
        #[serde(skip)]
        path: BezPath,
        #[serde(skip)]
        transform: Affine,
        width: f64,
        paint: Paint,
        blend: BlendMode,
        opacity: f32,
        glow: Option<Glow>,
    },
    /// Sprite stretched over `dest`, in the coordinate space set up by `transform`.
    Sprite {
        sprite: SpriteKind,
        #[serde(skip)]
        dest: Rect,
        #[serde(skip)]
        transform: Affine,
        opacity: f32,
        /// Recolor with this color using [`BlendMode::TintInside`] before compositing.
        tint: Option<Rgba>,
    },
    /// Text centered horizontally on `at`, with `at.y` on the baseline.
    Text {
        text: String,
        #[serde(skip)]
        at: Point,
        size: f32,
        bold: bool,
        color: Rgba,
        glow: Option<Glow>,
    },
}

impl DrawOp {
    pub fn fill(path: BezPath, paint: Paint, blend: BlendMode, opacity: f32) -> Self {
        Self::Fill {
            path,
            transform: Affine::IDENTITY,
            paint,
            blend,
            opacity,
        }
    }

    pub fn stroke(path: BezPath, width: f64, paint: Paint) -> Self {
        Self::Stroke {
            path,
            transform: Affine::IDENTITY,
            width,
            paint,
            blend: BlendMode::Normal,
            opacity: 1.0,
            glow: None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Fill { .. } => "fill",
            Self::Stroke { .. } => "stroke",
            Self::Sprite { .. } => "sprite",
            Self::Text { .. } => "text",
        }
    }
}

/// Draw commands for one layer in one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerScene {
    pub layer: LayerKind,
    /// Virtual-canvas to window transform, `translate(-scroll, 0)`.
    #[serde(skip)]
    pub origin: Affine,
    pub ops: Vec<DrawOp>,
}

impl LayerScene {
    pub fn new(layer: LayerKind, origin: Affine) -> Self {
        Self {
            layer,
            origin,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn text_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| op.is_text())
    }

    /// Window x of a virtual-canvas x.
    pub fn to_window_x(&self, virtual_x: f64) -> f64 {
        (self.origin * Point::new(virtual_x, 0.0)).x
    }
}

/// Aspect ratios of decoded sprites; `None` while a sprite is not decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct SpriteInfo {
    pub indicator_aspect: Option<f64>,
    pub cloud_aspect: Option<f64>,
}

impl SpriteInfo {
    pub fn from_sheet(sheet: &SpriteSheet) -> Self {
        Self {
            indicator_aspect: sheet.indicator.as_ref().map(|s| s.aspect()),
            cloud_aspect: sheet.cloud.as_ref().map(|s| s.aspect()),
        }
    }
}

/// Immutable per-frame state shared by every layer builder.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    pub time: f64,
    pub scroll: f64,
    pub window: Window,
    /// Culling range in virtual x, overscan included.
    pub visible: (f64, f64),
    pub hover: Option<Hover>,
    pub lens: Lens,
    pub ribbon_time: f64,
    pub toggles: LayerToggles,
    pub axis_owner: Option<LayerKind>,
    /// Present while the indicator sprite should be drawn.
    pub indicator: Option<Indicator>,
    pub height: f64,
    pub base_center_y: f64,
    pub sprites: SpriteInfo,
}

impl FrameSnapshot {
    pub fn origin(&self) -> Affine {
        Affine::translate((-self.scroll, 0.0))
    }

    pub fn is_visible(&self, x: f64) -> bool {
        x >= self.visible.0 && x <= self.visible.1
    }

    pub fn owns_axis(&self, layer: LayerKind) -> bool {
        self.axis_owner == Some(layer)
    }
}

/// Everything a backend needs to produce one frame.
#[derive(Clone, Debug)]
pub struct FramePlan {
    pub canvas: Canvas,
    pub snapshot: FrameSnapshot,
    /// One scene per enabled layer, bottom to top.
    pub scenes: Vec<LayerScene>,
    pub presentation: Presentation,
    pub tooltip: Option<Tooltip>,
    pub sprites: SpriteSheet,
}

impl FramePlan {
    pub fn scene(&self, layer: LayerKind) -> Option<&LayerScene> {
        self.scenes.iter().find(|s| s.layer == layer)
    }

    /// Serializable overview of the plan, without geometry.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            width: self.canvas.width,
            height: self.canvas.height,
            time: self.snapshot.time,
            scroll: self.snapshot.scroll,
            visible: self.snapshot.visible,
            hover_index: self.snapshot.hover.map(|h| h.index),
            presentation: self.presentation.clone(),
            tooltip: self.tooltip.clone(),
            scenes: self.scenes.iter().map(SceneSummary::of).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlanSummary {
    pub width: u32,
    pub height: u32,
    pub time: f64,
    pub scroll: f64,
    pub visible: (f64, f64),
    pub hover_index: Option<usize>,
    pub presentation: Presentation,
    pub tooltip: Option<Tooltip>,
    pub scenes: Vec<SceneSummary>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSummary {
    pub layer: LayerKind,
    /// Op count per kind name.
    pub ops: BTreeMap<&'static str, usize>,
    /// Axis label texts in draw order.
    pub labels: Vec<String>,
}

impl SceneSummary {
    fn of(scene: &LayerScene) -> Self {
        let mut ops = BTreeMap::new();
        for op in &scene.ops {
            *ops.entry(op.kind_name()).or_insert(0) += 1;
        }
        let labels = scene
            .text_ops()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        Self {
            layer: scene.layer,
            ops,
            labels,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
