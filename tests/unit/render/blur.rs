use super::*;

#[test]
fn radius_zero_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(blur_rgba8_premul(&src, 1, 2, 0, 1.0).unwrap(), src);
}

#[test]
fn constant_image_is_unchanged() {
    let (w, h) = (4u32, 3u32);
    let src = [10u8, 20, 30, 40].repeat((w * h) as usize);
    assert_eq!(blur_rgba8_premul(&src, w, h, 3, 2.0).unwrap(), src);
}

#[test]
fn single_pixel_spreads_and_keeps_energy() {
    let (w, h) = (7u32, 7u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((3 * w + 3) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = blur_rgba8_premul(&src, w, h, 2, 1.2).unwrap();
    assert!(out.chunks_exact(4).filter(|px| px[3] != 0).count() > 1);
    let sum_a: i32 = out.chunks_exact(4).map(|px| i32::from(px[3])).sum();
    assert!((sum_a - 255).abs() <= 6);
}

#[test]
fn mismatched_buffer_is_rejected() {
    assert!(blur_rgba8_premul(&[0u8; 7], 1, 2, 1, 1.0).is_err());
}

#[test]
fn shadow_blur_maps_to_three_sigma_radius() {
    let blur = BlurSpec::from_shadow_blur(15.0).unwrap();
    assert_eq!(blur.sigma, 7.5);
    assert_eq!(blur.radius, 23);
    assert!(BlurSpec::from_shadow_blur(0.0).is_none());
}

#[test]
fn spread_is_symmetric_around_the_source() {
    let (w, h) = (9u32, 5u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((2 * w + 4) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[0, 0, 255, 255]);

    let out = blur_rgba8_premul(&src, w, h, 3, 1.5).unwrap();
    let alpha = |x: u32, y: u32| out[((y * w + x) * 4 + 3) as usize];
    assert_eq!(alpha(2, 2), alpha(6, 2));
    assert_eq!(alpha(4, 0), alpha(4, 4));
    assert!(alpha(4, 2) > alpha(5, 2));
    assert!(out.chunks_exact(4).all(|px| px[0] == 0 && px[2] == px[3]));
}
