use super::*;
use crate::layers::LayerToggles;
use crate::render::plan::FrameSnapshot;
use crate::render::scene::fixture::snapshot;

#[derive(Default)]
struct RecordingBackend {
    calls: Vec<String>,
    fail: Option<LayerKind>,
}

impl LayerBackend for RecordingBackend {
    fn begin_frame(&mut self, canvas: Canvas) -> DriftlineResult<()> {
        self.calls.push(format!("begin {}x{}", canvas.width, canvas.height));
        Ok(())
    }

    fn clear_layer(&mut self, layer: LayerKind) -> DriftlineResult<()> {
        self.calls.push(format!("clear {}", layer.name()));
        Ok(())
    }

    fn render_layer(&mut self, scene: &LayerScene, _sprites: &SpriteSheet) -> DriftlineResult<()> {
        self.calls.push(format!("render {}", scene.layer.name()));
        if self.fail == Some(scene.layer) {
            return Err(crate::foundation::error::DriftlineError::render("boom"));
        }
        Ok(())
    }

    fn compose(&mut self) -> DriftlineResult<FrameRGBA> {
        self.calls.push("compose".to_owned());
        Ok(FrameRGBA {
            width: 1,
            height: 1,
            data: vec![0; 4],
            premultiplied: true,
        })
    }
}

fn plan(snap: FrameSnapshot, layers: &[LayerKind]) -> FramePlan {
    FramePlan {
        canvas: Canvas::new(8, 4).unwrap(),
        snapshot: snap,
        scenes: layers
            .iter()
            .map(|&l| LayerScene::new(l, snap.origin()))
            .collect(),
        presentation: snap.toggles.presentation(),
        tooltip: None,
        sprites: SpriteSheet::default(),
    }
}

#[test]
fn every_layer_is_cleared_and_enabled_ones_render() {
    let toggles = LayerToggles::only(LayerKind::Harvest).with(LayerKind::Sentiment, true);
    let p = plan(
        snapshot(0.0, toggles),
        &[LayerKind::Harvest, LayerKind::Sentiment],
    );
    let mut backend = RecordingBackend::default();
    execute_plan(&mut backend, &p).unwrap();
    assert_eq!(
        backend.calls,
        [
            "begin 8x4",
            "clear weather",
            "clear harvest",
            "render harvest",
            "clear wave",
            "clear sentiment",
            "render sentiment",
            "compose",
        ]
    );
}

#[test]
fn a_failing_layer_is_cleared_and_the_frame_completes() {
    let p = plan(
        snapshot(0.0, LayerToggles::ALL),
        &LayerKind::STACK,
    );
    let mut backend = RecordingBackend {
        fail: Some(LayerKind::Harvest),
        ..RecordingBackend::default()
    };
    execute_plan(&mut backend, &p).unwrap();

    let harvest: Vec<_> = backend
        .calls
        .iter()
        .filter(|c| c.ends_with("harvest"))
        .collect();
    assert_eq!(harvest, ["clear harvest", "render harvest", "clear harvest"]);
    assert!(backend.calls.iter().any(|c| c == "render sentiment"));
    assert_eq!(backend.calls.last().map(String::as_str), Some("compose"));
}
