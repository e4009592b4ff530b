use super::*;

fn viewport(window: f64) -> ViewportController {
    ViewportController::new(4400.0, window, 0.05, 0.5, 100.0)
}

#[test]
fn target_is_ratio_of_scrollable_range() {
    let mut v = viewport(1400.0);
    v.set_target(0.5);
    assert_eq!(v.target(), 1500.0);
    v.set_target(7.0);
    assert_eq!(v.target(), 3000.0);
    v.set_target(-1.0);
    assert_eq!(v.target(), 0.0);
}

#[test]
fn advance_converges_then_holds() {
    let mut v = viewport(1000.0);
    v.set_target(1.0);
    let mut steps = 0;
    while v.current() != v.target() {
        let before = (v.target() - v.current()).abs();
        v.advance();
        let after = (v.target() - v.current()).abs();
        assert!(after < before);
        steps += 1;
        assert!(steps < 1000, "did not converge");
    }
    assert_eq!(v.current(), 3400.0);
    for _ in 0..10 {
        assert_eq!(v.advance(), 3400.0);
    }
}

#[test]
fn first_step_closes_five_percent() {
    let mut v = viewport(400.0);
    v.set_target(1.0);
    v.advance();
    assert!((v.current() - 200.0).abs() < 1e-9);
}

#[test]
fn window_wider_than_canvas_never_scrolls() {
    let mut v = viewport(5000.0);
    v.set_target(1.0);
    v.advance();
    assert_eq!(v.current(), 0.0);
    assert_eq!(v.max_scroll(), 0.0);
}

#[test]
fn visible_range_includes_overscan() {
    let mut v = viewport(1000.0);
    v.set_target(0.1);
    while v.current() != v.target() {
        v.advance();
    }
    assert_eq!(v.visible_range(), (240.0, 1440.0));
}

#[test]
fn resize_reclamps_scroll() {
    let mut v = viewport(1000.0);
    v.set_target(1.0);
    for _ in 0..2000 {
        v.advance();
    }
    assert_eq!(v.current(), 3400.0);
    v.resize(2400.0);
    assert_eq!(v.target(), 2000.0);
    assert_eq!(v.current(), 2000.0);
    assert_eq!(v.window_width(), 2400.0);
}

#[test]
fn jump_skips_easing() {
    let mut vp = ViewportController::new(4400.0, 800.0, 0.05, 0.5, 100.0);
    vp.jump_to(0.5);
    assert_eq!(vp.current(), 1800.0);
    assert_eq!(vp.advance(), 1800.0);
}
