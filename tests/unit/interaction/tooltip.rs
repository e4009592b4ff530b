use super::*;
use chrono::NaiveDate;

fn record(temperature: f64, precipitation: f64) -> Record {
    Record {
        date: NaiveDate::from_ymd_opt(2021, 7, 1).unwrap(),
        temperature,
        precipitation,
        price: 3200.0,
        sentiment: 0.35,
    }
}

#[test]
fn lines_follow_layer_order() {
    let t = tooltip_for(&LayerToggles::ALL);
    let layers: Vec<_> = t.lines.iter().map(|l| l.layer).collect();
    assert_eq!(
        layers,
        vec![LayerKind::Weather, LayerKind::Harvest, LayerKind::Wave, LayerKind::Sentiment]
    );
    assert_eq!(t.date_label, "2021-07-01");
    assert_eq!(t.lines[0].text, "24.5°C / 120mm");
    assert_eq!(t.lines[1].text, "Est. Harvest: 468");
    assert_eq!(t.lines[2].text, "Price: 3200 Won");
    assert_eq!(t.lines[3].text, "Infl. Risk: 6.5");
    assert_eq!(t.anchor, Point::new(115.0, 185.0));
}

fn tooltip_for(toggles: &LayerToggles) -> Tooltip {
    format_tooltip(&record(24.5, 120.0), Some(468.0), toggles, Point::new(100.0, 200.0)).unwrap()
}

#[test]
fn nothing_enabled_means_no_tooltip() {
    assert!(format_tooltip(&record(1.0, 1.0), None, &LayerToggles::NONE, Point::ZERO).is_none());
}

#[test]
fn weather_status_colors() {
    assert_eq!(WeatherStatus::classify(29.0, 10.0), WeatherStatus::Heatwave);
    assert_eq!(WeatherStatus::classify(28.0, 10.0), WeatherStatus::Normal);
    assert_eq!(WeatherStatus::classify(-1.0, 10.0), WeatherStatus::ColdWave);
    assert_eq!(WeatherStatus::classify(10.0, 201.0), WeatherStatus::HeavyRain);
    assert_eq!(WeatherStatus::classify(10.0, 201.0).color(), Rgba::rgb(0x7f, 0xff, 0xd4));
    assert_eq!(
        WeatherStatus::classify(30.0, 250.0).color(),
        WeatherStatus::Heatwave.color()
    );
    assert_eq!(
        WeatherStatus::classify(15.0, 15.0).color(),
        Rgba::from_hex("#b0e0e6").unwrap()
    );
}
