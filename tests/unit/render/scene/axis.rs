use super::*;
use crate::layers::{LayerKind, LayerToggles};
use crate::render::scene::fixture::{fields, snapshot};

fn texts(ops: &[DrawOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn january_gets_year_and_month_and_every_third_month_otherwise() {
    let f = fields(24);
    let snap = snapshot(0.0, LayerToggles::only(LayerKind::Weather));
    assert_eq!(texts(&axis_labels(&f.wave, &snap)), ["2019", "01", "04"]);
}

#[test]
fn labels_are_culled_to_the_visible_range() {
    let f = fields(24);
    let snap = snapshot(1800.0, LayerToggles::only(LayerKind::Weather));
    assert_eq!(texts(&axis_labels(&f.wave, &snap)), ["10", "2020", "01"]);
}

#[test]
fn year_label_style_and_position() {
    let f = fields(24);
    let snap = snapshot(0.0, LayerToggles::only(LayerKind::Weather));
    let ops = axis_labels(&f.wave, &snap);
    let DrawOp::Text {
        at,
        size,
        bold,
        color,
        glow,
        ..
    } = &ops[0]
    else {
        panic!("expected text");
    };
    assert_eq!(at.y, 565.0);
    assert_eq!(at.x, 200.0);
    assert_eq!(*size, 13.0);
    assert!(*bold);
    assert!((color.a - 0.7).abs() < 1e-6);
    assert_eq!(glow.map(|g| g.blur), Some(8.0));
}
