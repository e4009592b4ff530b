//! Sentiment clouds with randomized, load-time animation parameters.

use std::f64::consts::TAU;

use crate::data::record::Record;
use crate::fields::timeline::Timeline;
use crate::foundation::core::Rgba;
use crate::foundation::math::RandomSource;
use crate::transform::color::{ColorRamp, SequentialColor};
use crate::transform::scale::{LinearScale, SqrtScale};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct InflationPoint {
    pub index: usize,
    pub x: f64,
    /// Inflation risk, `(1 - sentiment) * 10`.
    pub metric: f64,
    pub count: f64,
    pub phase: f64,
    pub speed: f64,
    pub float_amplitude: f64,
    pub y: f64,
    pub color: Rgba,
    pub radius: f64,
}

impl InflationPoint {
    /// Vertical bobbing around `y` at `time`.
    pub fn float_offset(&self, time: f64) -> f64 {
        (time * self.speed * 3.0 + self.phase).sin() * (self.float_amplitude * 2.0)
    }

    /// Pulsating sprite opacity at `time`.
    pub fn alpha(&self, time: f64) -> f64 {
        0.8 + (time * 0.5 + self.phase).sin() * 0.1
    }
}

/// Risk score for a sentiment in `[0, 1]`.
pub fn inflation_metric(sentiment: f64) -> f64 {
    (1.0 - sentiment) * 10.0
}

/// Build one cloud per record. Randomness comes only from `rng`, drawn in record order.
pub fn build_inflation_points(
    records: &[Record],
    timeline: &Timeline,
    height: f64,
    rng: &mut dyn RandomSource,
) -> Vec<InflationPoint> {
    let y_scale = LinearScale::new((0.0, 10.0), (height - 100.0, 50.0));
    let color = SequentialColor::new(
        (2.0, 8.0),
        ColorRamp::Rgb {
            from: Rgba::rgb(0x00, 0xBF, 0xFF),
            to: Rgba::rgb(0xFF, 0x33, 0x33),
        },
    );
    let radius = SqrtScale::new((0.0, 1500.0), (30.0, 90.0));

    records
        .iter()
        .enumerate()
        .map(|(index, r)| {
            let metric = inflation_metric(r.sentiment);
            let count = 500.0 + rng.next_f64() * 1000.0;
            let phase = rng.next_f64() * TAU;
            let speed = 0.02 + rng.next_f64() * 0.03;
            let float_amplitude = 5.0 + rng.next_f64() * 10.0;
            InflationPoint {
                index,
                x: timeline.x(index),
                metric,
                count,
                phase,
                speed,
                float_amplitude,
                y: y_scale.apply(metric),
                color: color.at(metric),
                radius: radius.apply(count),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/fields/cloud.rs"]
mod tests;
