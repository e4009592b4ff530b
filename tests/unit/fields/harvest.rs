use super::*;
use chrono::NaiveDate;

fn records(prices: &[f64]) -> Vec<Record> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| Record {
            date: NaiveDate::from_ymd_opt(2023, i as u32 + 1, 1).unwrap(),
            temperature: 10.0,
            precipitation: 10.0,
            price,
            sentiment: 0.5,
        })
        .collect()
}

#[test]
fn value_is_floor_of_k_over_price() {
    let prices = [1000.0, 2000.0, 3333.0, 7.0, 4567.89];
    let recs = records(&prices);
    let tl = Timeline::new(recs.len(), 200.0, 4000.0).unwrap();
    let bars = build_harvest_bars(&recs, &tl, 1_500_000.0).unwrap();
    for (bar, price) in bars.iter().zip(prices) {
        assert_eq!(bar.value, (1_500_000.0 / price).floor());
    }
    assert_eq!(bars[0].value, 1500.0);
    assert_eq!(bars[2].value, 450.0);
}

#[test]
fn zero_price_is_degenerate() {
    let recs = records(&[1000.0, 0.0, 2000.0]);
    let tl = Timeline::new(3, 200.0, 4000.0).unwrap();
    let err = build_harvest_bars(&recs, &tl, 1_500_000.0).unwrap_err();
    assert!(matches!(err, DriftlineError::DegenerateInput(_)));
    let recs = records(&[1000.0, -5.0]);
    let tl = Timeline::new(2, 200.0, 4000.0).unwrap();
    assert!(build_harvest_bars(&recs, &tl, 1_500_000.0).is_err());
}

#[test]
fn layout_pads_and_rounds_axis() {
    let layout = LinearBarLayout::new(600.0, 1430.0);
    assert_eq!(layout.axis_max(), 2000.0);
    assert_eq!(layout.baseline_y(), 540.0);
    assert_eq!(layout.pixel_for_value(0.0), 540.0);
    assert_eq!(layout.pixel_for_value(2000.0), 50.0);
    assert_eq!(layout.pixel_for_value(1000.0), 295.0);
}

#[test]
fn nice_ceiling_steps() {
    assert_eq!(nice_ceiling(0.0), 1.0);
    assert_eq!(nice_ceiling(1.0), 1.0);
    assert_eq!(nice_ceiling(230.0), 250.0);
    assert_eq!(nice_ceiling(600.0), 1000.0);
    assert_eq!(nice_ceiling(48.0), 50.0);
}
