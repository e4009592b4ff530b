use super::*;

fn close(c: Rgba, rgb: (u8, u8, u8)) -> bool {
    let d = |a: u8, b: u8| (i16::from(a) - i16::from(b)).abs() <= 1;
    d(c.r, rgb.0) && d(c.g, rgb.1) && d(c.b, rgb.2)
}

#[test]
fn rgb_interpolation_endpoints_and_midpoint() {
    let a = Rgba::rgb(0x00, 0xce, 0xd1);
    let b = Rgba::rgb(0x7f, 0xff, 0xd4);
    assert_eq!(interpolate_rgb(a, b, 0.0), a);
    assert_eq!(interpolate_rgb(a, b, 1.0), b);
    let mid = interpolate_rgb(a, b, 0.5);
    assert_eq!(mid.r, 64);
    assert_eq!(interpolate_rgb(a, b, 7.0), b);
}

#[test]
fn cool_ramp_matches_reference_endpoints() {
    assert!(close(ColorRamp::Cool.at(0.0), (110, 64, 170)));
    assert!(close(ColorRamp::Cool.at(1.0), (175, 240, 91)));
}

#[test]
fn sequential_color_clamps_outside_domain() {
    let s = SequentialColor::new(
        (2.0, 8.0),
        ColorRamp::Rgb {
            from: Rgba::rgb(0x00, 0xbf, 0xff),
            to: Rgba::rgb(0xff, 0x33, 0x33),
        },
    );
    assert_eq!(s.at(0.0), Rgba::rgb(0x00, 0xbf, 0xff));
    assert_eq!(s.at(10.0), Rgba::rgb(0xff, 0x33, 0x33));
    let mid = s.at(5.0);
    assert!(mid.r > 100 && mid.r < 155);
}
