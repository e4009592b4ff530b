use super::*;

fn date(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

fn columns(n: usize) -> Columns {
    Columns {
        dates: (0..n).map(|i| date(2020 + (i / 12) as i32, (i % 12) as u32 + 1)).collect(),
        temperature: vec![10.0; n],
        precipitation: vec![50.0; n],
        price: vec![1000.0; n],
        sentiment: vec![0.5; n],
    }
}

#[test]
fn zips_columns_in_order() {
    let ds = Dataset::from_columns(columns(14)).unwrap();
    assert_eq!(ds.len(), 14);
    let r = ds.get(12).unwrap();
    assert_eq!(r.year(), 2021);
    assert_eq!(r.month(), 1);
    assert_eq!(r.date_label(), "2021-01-01");
}

#[test]
fn fewer_than_two_records_is_degenerate() {
    let err = Dataset::from_columns(columns(1)).unwrap_err();
    assert!(matches!(err, DriftlineError::DegenerateInput(_)));
    assert!(Dataset::from_columns(columns(0)).is_err());
}

#[test]
fn mismatched_column_lengths_are_degenerate() {
    let mut c = columns(3);
    c.price.pop();
    let err = Dataset::from_columns(c).unwrap_err();
    assert!(err.to_string().contains("price"));
}

#[test]
fn unsorted_dates_are_rejected() {
    let mut c = columns(3);
    c.dates.swap(0, 2);
    assert!(Dataset::from_columns(c).is_err());
}

#[test]
fn non_finite_and_out_of_range_values_are_rejected() {
    let mut c = columns(3);
    c.temperature[1] = f64::NAN;
    assert!(Dataset::from_columns(c).is_err());

    let mut c = columns(3);
    c.sentiment[2] = 1.5;
    assert!(Dataset::from_columns(c).is_err());
}

#[test]
fn zero_price_is_left_to_the_harvest_builder() {
    let mut c = columns(2);
    c.price[0] = 0.0;
    assert!(Dataset::from_columns(c).is_ok());
}

#[test]
fn columns_accept_short_aliases() {
    let json = r#"{
        "dates": ["2020-01-01", "2020-02-01"],
        "temps": [1.0, 2.0],
        "precips": [3.0, 4.0],
        "prices": [5.0, 6.0],
        "sentiments": [0.1, 0.2]
    }"#;
    let c: Columns = serde_json::from_str(json).unwrap();
    assert_eq!(c.price, vec![5.0, 6.0]);
    assert_eq!(c.dates[1], date(2020, 2));
}
