//! Simulated harvest bars and the chart layout hook they are drawn against.

use crate::data::record::Record;
use crate::fields::timeline::Timeline;
use crate::foundation::error::{DriftlineError, DriftlineResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HarvestBar {
    pub index: usize,
    pub x: f64,
    /// `floor(K / price)`.
    pub value: f64,
}

/// One bar per record, `value = floor(k / price)`.
///
/// A non-positive or non-finite price is rejected instead of producing `inf`.
pub fn build_harvest_bars(
    records: &[Record],
    timeline: &Timeline,
    k: f64,
) -> DriftlineResult<Vec<HarvestBar>> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| {
            if !r.price.is_finite() || r.price <= 0.0 {
                return Err(DriftlineError::degenerate(format!(
                    "record {index} ({}) has price {}; harvest needs a positive price",
                    r.date, r.price
                )));
            }
            Ok(HarvestBar {
                index,
                x: timeline.x(index),
                value: (k / r.price).floor(),
            })
        })
        .collect()
}

/// Vertical layout of the external bar chart the ribbons are drawn over.
pub trait BarLayout: Send + Sync {
    /// Pixel y of the value-zero line.
    fn baseline_y(&self) -> f64;
    /// Pixel y of a bar's top.
    fn pixel_for_value(&self, value: f64) -> f64;
}

/// Begin-at-zero linear axis with a rounded maximum, padded 50 px top and 60 px bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearBarLayout {
    top: f64,
    bottom: f64,
    max: f64,
}

impl LinearBarLayout {
    pub const PAD_TOP: f64 = 50.0;
    pub const PAD_BOTTOM: f64 = 60.0;

    pub fn new(height: f64, max_value: f64) -> Self {
        Self {
            top: Self::PAD_TOP,
            bottom: (height - Self::PAD_BOTTOM).max(Self::PAD_TOP),
            max: nice_ceiling(max_value),
        }
    }

    pub fn for_bars(height: f64, bars: &[HarvestBar]) -> Self {
        let max = bars.iter().map(|b| b.value).fold(0.0, f64::max);
        Self::new(height, max)
    }

    /// Axis maximum after rounding.
    pub fn axis_max(&self) -> f64 {
        self.max
    }
}

impl BarLayout for LinearBarLayout {
    fn baseline_y(&self) -> f64 {
        self.bottom
    }

    fn pixel_for_value(&self, value: f64) -> f64 {
        let t = (value / self.max).clamp(0.0, 1.0);
        self.bottom - t * (self.bottom - self.top)
    }
}

/// Smallest "nice" number (1, 2, 2.5, 5 or 10 times a power of ten) that is >= `v`.
fn nice_ceiling(v: f64) -> f64 {
    if !v.is_finite() || v <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(v.log10().floor());
    let fraction = v / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&n| n >= fraction)
        .unwrap_or(10.0);
    nice * magnitude
}

#[cfg(test)]
#[path = "../../tests/unit/fields/harvest.rs"]
mod tests;
