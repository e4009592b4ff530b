use super::*;

fn timeline() -> Timeline {
    Timeline::new(60, 200.0, 4000.0).unwrap()
}

#[test]
fn left_padding_edge() {
    let tl = timeline();
    assert_eq!(resolve(&tl, Point::ZERO, 199.0, 0.0), None);
    let h = resolve(&tl, Point::ZERO, 200.0, 0.0).unwrap();
    assert_eq!(h.index, 0);
    assert_eq!(h.raw_index, 0.0);
}

#[test]
fn right_padding_edge() {
    let tl = timeline();
    assert_eq!(resolve(&tl, Point::ZERO, 4200.0, 0.0).map(|h| h.index), Some(59));
    assert_eq!(resolve(&tl, Point::ZERO, 4200.5, 0.0), None);
}

#[test]
fn virtual_mapping_accounts_for_scroll_and_bottom_alignment() {
    let w = Window::new(1200.0, 900.0);
    assert_eq!(to_virtual(Point::new(100.0, 500.0), 300.0, w, 600.0), (400.0, 200.0));
    // above the canvas: fall back to window y
    assert_eq!(to_virtual(Point::new(0.0, 120.0), 0.0, w, 600.0), (0.0, 120.0));
}

#[test]
fn lens_profile() {
    let lens = Lens::new(Some(1000.0), 250.0);
    assert_eq!(lens.weight(1000.0), 1.0);
    assert_eq!(lens.scale(1000.0), 1.0);
    assert_eq!(lens.weight(1250.0), 0.0);
    assert_eq!(lens.weight(700.0), 0.0);
    let sigma: f64 = 100.0;
    let expected = (-(100.0f64 * 100.0) / (2.0 * sigma * sigma)).exp();
    assert!((lens.weight(1100.0) - expected).abs() < 1e-12);
    assert!(lens.weight(1050.0) > lens.weight(1100.0));
}

#[test]
fn inactive_lens_is_flat() {
    let lens = Lens::inactive(250.0);
    assert!(!lens.is_active());
    assert_eq!(lens.scale(123.0), 0.35);
}
