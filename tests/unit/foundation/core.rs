use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(4, 3).unwrap().byte_len(), 48);
}

#[test]
fn window_canvas_is_clamped_to_u16() {
    let c = Window::new(100_000.0, 600.0).canvas();
    assert_eq!(c.width, u32::from(u16::MAX));
    assert_eq!(c.height, 600);
}

#[test]
fn hex_colors_parse() {
    assert_eq!(Rgba::from_hex("#006994").unwrap(), Rgba::rgb(0x00, 0x69, 0x94));
    assert_eq!(Rgba::from_hex("00ced1").unwrap(), Rgba::rgb(0x00, 0xce, 0xd1));
    assert!(Rgba::from_hex("#fff").is_err());
    assert!(Rgba::from_hex("#gggggg").is_err());
}

#[test]
fn hsla_matches_css_reference_points() {
    // hsl(120, 100%, 50%) is pure green.
    let g = Rgba::from_hsla(120.0, 1.0, 0.5, 1.0);
    assert_eq!((g.r, g.g, g.b), (0, 255, 0));
    // hsl(0, 0%, 100%) is white whatever the hue.
    let w = Rgba::from_hsla(300.0, 0.0, 1.0, 0.5);
    assert_eq!((w.r, w.g, w.b), (255, 255, 255));
    assert_eq!(w.a, 0.5);
}

#[test]
fn premul_scales_channels_by_alpha() {
    let p = Rgba::rgba(255, 128, 0, 0.5).to_premul();
    assert_eq!(p.a, 128);
    assert_eq!(p.r, 128);
    assert_eq!(p.b, 0);
    assert_eq!(Rgba::TRANSPARENT.to_premul(), Rgba8Premul::transparent());
}
