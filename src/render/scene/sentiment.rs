use kurbo::{Affine, Rect};

use crate::assets::sprite::SpriteKind;
use crate::fields::LayerFields;
use crate::layers::LayerKind;
use crate::render::plan::{DrawOp, FrameSnapshot, LayerScene};

/// Clouds for the visible sentiment points, tinted by risk and bobbing with time.
pub fn sentiment_scene(fields: &LayerFields, snap: &FrameSnapshot) -> LayerScene {
    let mut scene = LayerScene::new(LayerKind::Sentiment, snap.origin());
    let Some(aspect) = snap.sprites.cloud_aspect else {
        tracing::debug!("cloud sprite not decoded yet");
        return scene;
    };
    for p in fields.clouds.iter().filter(|p| snap.is_visible(p.x)) {
        let w = p.radius * 2.0;
        let h = w * aspect;
        let cy = p.y + p.float_offset(snap.time);
        scene.push(DrawOp::Sprite {
            sprite: SpriteKind::Cloud,
            dest: Rect::new(p.x - w / 2.0, cy - h / 2.0, p.x + w / 2.0, cy + h / 2.0),
            transform: Affine::IDENTITY,
            opacity: p.alpha(snap.time) as f32,
            tint: Some(p.color),
        });
    }
    scene
}

#[cfg(test)]
#[path = "../../../tests/unit/render/scene/sentiment.rs"]
mod tests;
