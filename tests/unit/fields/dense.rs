use super::*;
use chrono::NaiveDate;

fn record(month: u32, temperature: f64, precipitation: f64) -> Record {
    Record {
        date: NaiveDate::from_ymd_opt(2020, month, 1).unwrap(),
        temperature,
        precipitation,
        price: 1000.0,
        sentiment: 0.5,
    }
}

fn two_months() -> Vec<Record> {
    vec![record(1, 10.0, 50.0), record(2, 30.0, 200.0)]
}

#[test]
fn produces_steps_plus_one_strictly_increasing_samples() {
    let records: Vec<_> = (1..=12)
        .map(|m| record(m, m as f64 * 3.0, m as f64 * 20.0))
        .collect();
    for steps in [1usize, 10, 800] {
        let field = DenseField::build(&records, steps, 200.0, 4000.0).unwrap();
        let s = field.samples();
        assert_eq!(s.len(), steps + 1);
        assert_eq!(s[0].t, 0.0);
        assert_eq!(s[steps].t, 1.0);
        assert_eq!(s[0].x, 200.0);
        assert_eq!(s[steps].x, 4200.0);
        for w in s.windows(2) {
            assert!(w[1].t > w[0].t);
            assert!(w[1].x > w[0].x);
        }
    }
}

#[test]
fn build_is_deterministic() {
    let records = two_months();
    let a = DenseField::build(&records, 50, 200.0, 4000.0).unwrap();
    let b = DenseField::build(&records, 50, 200.0, 4000.0).unwrap();
    for (x, y) in a.samples().iter().zip(b.samples()) {
        assert_eq!(x.base_flow.to_bits(), y.base_flow.to_bits());
        assert_eq!(x.temperature_amplitude.to_bits(), y.temperature_amplitude.to_bits());
        assert_eq!(x.raw_precip.to_bits(), y.raw_precip.to_bits());
    }
    assert_eq!(a, b);
}

#[test]
fn two_month_midpoint_scenario() {
    let field = DenseField::build(&two_months(), 10, 200.0, 4000.0).unwrap();
    let mid = field.samples()[5];
    assert_eq!(mid.t, 0.5);
    assert!((mid.raw_temp - 20.0).abs() < 1e-12);
    assert!((mid.raw_precip - 125.0).abs() < 1e-12);
    assert!((mid.temperature_amplitude - 25.0).abs() < 1e-12);
    assert_eq!(mid.event_intensity, 0.2);
    assert!((mid.event_amplitude - 4.0).abs() < 1e-12);
    assert!((mid.precipitation_amplitude - 18.75).abs() < 1e-12);
}

#[test]
fn temperature_amplitude_is_monotonic() {
    let mut prev = f64::NEG_INFINITY;
    for i in 0..200 {
        let raw = -20.0 + i as f64 * 0.37;
        let s = DenseSample::from_raw(0.3, 0.0, raw, 80.0);
        assert!(s.temperature_amplitude > prev);
        prev = s.temperature_amplitude;
    }
}

#[test]
fn event_intensity_is_two_valued() {
    let cases = [
        (26.0, 151.0, 1.7),
        (25.0, 151.0, 0.2),
        (26.0, 150.0, 0.2),
        (40.0, 400.0, 1.7),
        (-5.0, 0.0, 0.2),
    ];
    for (temp, precip, expected) in cases {
        let s = DenseSample::from_raw(0.0, 0.0, temp, precip);
        assert!((s.event_intensity - expected).abs() < 1e-12, "{temp} {precip}");
        assert!((s.event_amplitude - expected * 20.0).abs() < 1e-12);
    }
}

#[test]
fn end_sample_uses_last_record() {
    let field = DenseField::build(&two_months(), 10, 200.0, 4000.0).unwrap();
    let last = field.samples()[10];
    assert_eq!(last.raw_temp, 30.0);
    assert_eq!(last.raw_precip, 200.0);
    assert_eq!(last.event_intensity, 1.7);
}

#[test]
fn rejects_degenerate_input() {
    let one = vec![record(1, 10.0, 50.0)];
    assert!(matches!(
        DenseField::build(&one, 10, 0.0, 100.0),
        Err(DriftlineError::DegenerateInput(_))
    ));
    assert!(DenseField::build(&two_months(), 0, 0.0, 100.0).is_err());
}

#[test]
fn lookup_by_x_and_raw_index() {
    let field = DenseField::build(&two_months(), 10, 200.0, 4000.0).unwrap();
    assert_eq!(field.sample_at_x(0.0).t, 0.0);
    assert_eq!(field.sample_at_x(2200.0).t, 0.5);
    assert_eq!(field.sample_at_x(2599.0).t, 0.5);
    assert_eq!(field.sample_at_x(1e6).t, 1.0);
    assert_eq!(field.sample_for_raw_index(0.5, 2).t, 0.5);
    assert_eq!(field.sample_for_raw_index(-3.0, 2).t, 0.0);
}
