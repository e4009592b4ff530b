use super::*;

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    assert_eq!(lerp(10.0, 30.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 30.0, 1.0), 30.0);
    assert_eq!(lerp(10.0, 30.0, 0.5), 20.0);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let mut c = Rng64::new(124);
    assert_ne!(Rng64::new(123).next_u64(), c.next_u64());
}

#[test]
fn rng_unit_samples_stay_in_half_open_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}
