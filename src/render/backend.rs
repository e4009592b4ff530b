use crate::assets::sprite::SpriteSheet;
use crate::foundation::core::Canvas;
use crate::foundation::error::DriftlineResult;
use crate::layers::LayerKind;

use super::plan::{FramePlan, LayerScene};

/// A composed frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Executes layer scenes onto per-layer surfaces and stacks them.
pub trait LayerBackend {
    /// Size the layer surfaces for this frame. Called once per frame before any layer.
    fn begin_frame(&mut self, canvas: Canvas) -> DriftlineResult<()>;
    fn clear_layer(&mut self, layer: LayerKind) -> DriftlineResult<()>;
    fn render_layer(&mut self, scene: &LayerScene, sprites: &SpriteSheet) -> DriftlineResult<()>;
    /// Stack the layer surfaces bottom to top.
    fn compose(&mut self) -> DriftlineResult<FrameRGBA>;
}

/// Clear every layer, render the enabled ones and compose.
///
/// A layer that fails is logged and left cleared; the other layers still render.
pub fn execute_plan(backend: &mut dyn LayerBackend, plan: &FramePlan) -> DriftlineResult<FrameRGBA> {
    backend.begin_frame(plan.canvas)?;
    for layer in LayerKind::STACK {
        backend.clear_layer(layer)?;
        let Some(scene) = plan.scene(layer) else {
            continue;
        };
        if let Err(e) = backend.render_layer(scene, &plan.sprites) {
            tracing::warn!(layer = layer.name(), error = %e, "layer render failed");
            backend.clear_layer(layer)?;
        }
    }
    backend.compose()
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
