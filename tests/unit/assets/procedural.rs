use super::*;

fn alpha_at(s: &Sprite, x: u32, y: u32) -> u8 {
    s.pixels()[((y * s.width() + x) * 4 + 3) as usize]
}

#[test]
fn cloud_is_opaque_in_the_middle_and_clear_in_the_corner() {
    let s = cloud_sprite().unwrap();
    assert_eq!((s.width(), s.height()), (160, 100));
    assert_eq!(alpha_at(&s, 85, 60), 255);
    assert_eq!(alpha_at(&s, 0, 0), 0);
}

#[test]
fn indicator_hull_is_filled() {
    let s = indicator_sprite().unwrap();
    assert_eq!((s.width(), s.height()), (200, 90));
    assert_eq!(alpha_at(&s, 100, 70), 255);
    assert_eq!(alpha_at(&s, 199, 0), 0);
}
