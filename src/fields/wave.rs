//! Price points and their vertical scale.

use crate::data::record::Record;
use crate::fields::timeline::Timeline;
use crate::transform::scale::LinearScale;

/// Price domain mapped onto the wave layer's vertical extent.
pub const PRICE_DOMAIN: (f64, f64) = (2000.0, 9000.0);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WavePoint {
    pub index: usize,
    pub x: f64,
    /// Market price.
    pub value: f64,
    pub year: i32,
    pub month: u32,
}

/// Vertical placement of prices, anchored at 70% of the canvas height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ValueScale {
    center_y: f64,
    scale: LinearScale,
}

impl ValueScale {
    pub fn new(height: f64) -> Self {
        Self {
            center_y: height * 0.7,
            scale: LinearScale::new(PRICE_DOMAIN, (0.0, -350.0)),
        }
    }

    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    pub fn y(&self, value: f64) -> f64 {
        self.center_y + self.scale.apply(value)
    }

    /// Reference line drawn at the bottom of the price domain.
    pub fn baseline_y(&self) -> f64 {
        self.y(PRICE_DOMAIN.0)
    }
}

pub fn build_wave_points(records: &[Record], timeline: &Timeline) -> Vec<WavePoint> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| WavePoint {
            index,
            x: timeline.x(index),
            value: r.price,
            year: r.year(),
            month: r.month(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/fields/wave.rs"]
mod tests;
