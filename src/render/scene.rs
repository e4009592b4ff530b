//! Pure per-layer scene builders: `(fields, snapshot) -> LayerScene`.

use crate::fields::LayerFields;
use crate::layers::LayerKind;

use super::plan::{FrameSnapshot, LayerScene};

pub mod axis;
pub mod harvest;
pub mod sentiment;
pub mod wave;
pub mod weather;

/// Scene for one layer, whether or not it is enabled.
pub fn build_scene(layer: LayerKind, fields: &LayerFields, snap: &FrameSnapshot) -> LayerScene {
    let mut scene = match layer {
        LayerKind::Weather => weather::weather_scene(fields, snap),
        LayerKind::Harvest => harvest::harvest_scene(fields, snap),
        LayerKind::Wave => wave::wave_scene(fields, snap),
        LayerKind::Sentiment => sentiment::sentiment_scene(fields, snap),
    };
    if snap.owns_axis(layer) {
        scene.ops.extend(axis::axis_labels(&fields.wave, snap));
    }
    scene
}

/// Scenes for every enabled layer, bottom to top.
pub fn build_scenes(fields: &LayerFields, snap: &FrameSnapshot) -> Vec<LayerScene> {
    snap.toggles
        .enabled()
        .map(|layer| build_scene(layer, fields, snap))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene/fixture.rs"]
pub(crate) mod fixture;

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
