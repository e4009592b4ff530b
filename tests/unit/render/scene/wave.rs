use super::*;
use crate::interaction::hover::Hover;
use crate::layers::LayerToggles;
use crate::render::scene::fixture::{fields, snapshot};

#[test]
fn marker_radius_grows_linearly_near_the_pointer() {
    assert_eq!(marker_radius(500.0, None), 3.0);
    assert_eq!(marker_radius(500.0, Some(500.0)), 8.0);
    assert!((marker_radius(500.0, Some(550.0)) - 5.5).abs() < 1e-12);
    assert_eq!(marker_radius(500.0, Some(600.0)), 3.0);
}

#[test]
fn baseline_curve_then_visible_markers() {
    let f = fields(24);
    let snap = snapshot(0.0, LayerToggles::only(LayerKind::Wave));
    let scene = wave_scene(&f, &snap);

    assert!(matches!(scene.ops[0], DrawOp::Stroke { width, .. } if width == 1.0));
    let DrawOp::Stroke {
        width,
        paint: Paint::HorizontalGradient(stops),
        glow,
        ..
    } = &scene.ops[1]
    else {
        panic!("expected gradient stroke");
    };
    assert_eq!(*width, 4.0);
    assert_eq!(stops.len(), 24);
    assert_eq!(glow.map(|g| g.blur), Some(15.0));
    assert_eq!(scene.ops.len() - 2, 5);
}

#[test]
fn hovered_marker_is_larger() {
    let f = fields(24);
    let mut snap = snapshot(0.0, LayerToggles::only(LayerKind::Wave));
    let x = f.wave[2].x;
    snap.hover = Some(Hover {
        screen: kurbo::Point::new(x, 300.0),
        virtual_x: x,
        virtual_y: 300.0,
        raw_index: 2.0,
        index: 2,
    });
    let scene = wave_scene(&f, &snap);
    let widths: Vec<f64> = scene.ops[2..]
        .iter()
        .map(|op| match op {
            DrawOp::Fill { path, .. } => kurbo::Shape::bounding_box(path).width(),
            _ => 0.0,
        })
        .collect();
    assert!((widths[2] - 16.0).abs() < 0.2);
    assert!((widths[0] - 6.0).abs() < 0.2);
}
