use super::*;
use crate::foundation::math::Rng64;
use chrono::NaiveDate;

struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

fn records(sentiments: &[f64]) -> Vec<Record> {
    sentiments
        .iter()
        .enumerate()
        .map(|(i, &s)| Record {
            date: NaiveDate::from_ymd_opt(2022, i as u32 + 1, 1).unwrap(),
            temperature: 10.0,
            precipitation: 10.0,
            price: 1000.0,
            sentiment: s,
        })
        .collect()
}

#[test]
fn random_fields_stay_in_range() {
    let recs = records(&[0.1, 0.5, 0.9, 0.3]);
    let tl = Timeline::new(recs.len(), 200.0, 4000.0).unwrap();
    let mut rng = Rng64::new(42);
    for p in build_inflation_points(&recs, &tl, 600.0, &mut rng) {
        assert!((500.0..1500.0).contains(&p.count));
        assert!((0.0..TAU).contains(&p.phase));
        assert!((0.02..0.05).contains(&p.speed));
        assert!((5.0..15.0).contains(&p.float_amplitude));
        assert!((30.0..=90.0).contains(&p.radius));
    }
}

#[test]
fn same_seed_same_clouds() {
    let recs = records(&[0.2, 0.8]);
    let tl = Timeline::new(2, 200.0, 4000.0).unwrap();
    let a = build_inflation_points(&recs, &tl, 600.0, &mut Rng64::new(9));
    let b = build_inflation_points(&recs, &tl, 600.0, &mut Rng64::new(9));
    assert_eq!(a, b);
}

#[test]
fn metric_drives_position_and_color() {
    let recs = records(&[1.0, 0.5, 0.0]);
    let tl = Timeline::new(3, 200.0, 4000.0).unwrap();
    let pts = build_inflation_points(&recs, &tl, 600.0, &mut Fixed(0.0));
    assert_eq!(pts[0].metric, 0.0);
    assert_eq!(pts[0].y, 500.0);
    assert_eq!(pts[2].y, 50.0);
    assert_eq!((pts[0].color.r, pts[0].color.g, pts[0].color.b), (0x00, 0xBF, 0xFF));
    assert_eq!((pts[2].color.r, pts[2].color.g, pts[2].color.b), (0xFF, 0x33, 0x33));
    assert_eq!(pts[0].count, 500.0);
    assert_eq!(pts[0].phase, 0.0);
}

#[test]
fn animation_is_evaluated_on_demand() {
    let recs = records(&[0.5, 0.5]);
    let tl = Timeline::new(2, 0.0, 100.0).unwrap();
    let p = build_inflation_points(&recs, &tl, 600.0, &mut Fixed(0.5))[0];
    assert_eq!(p.float_offset(0.0), p.phase.sin() * p.float_amplitude * 2.0);
    for i in 0..100 {
        let a = p.alpha(i as f64 * 0.7);
        assert!((0.7..=0.9).contains(&a));
        assert!(p.float_offset(i as f64).abs() <= p.float_amplitude * 2.0 + 1e-9);
    }
}
