//! Dense interpolation of sparse monthly records into smooth per-step fields.

use crate::data::record::Record;
use crate::foundation::error::{DriftlineError, DriftlineResult};
use crate::foundation::math::lerp;

/// One evenly spaced synthetic point between two adjacent records.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DenseSample {
    /// Normalized position in `[0, 1]`.
    pub t: f64,
    /// Virtual-canvas x.
    pub x: f64,
    pub base_flow: f64,
    pub temperature_amplitude: f64,
    pub precipitation_amplitude: f64,
    pub event_intensity: f64,
    pub event_amplitude: f64,
    pub raw_temp: f64,
    pub raw_precip: f64,
}

const EVENT_BASE: f64 = 0.2;
const EVENT_BOOST: f64 = 1.5;
const EVENT_TEMP_THRESHOLD: f64 = 25.0;
const EVENT_PRECIP_THRESHOLD: f64 = 150.0;

impl DenseSample {
    /// Derive the amplitude fields from interpolated raw values.
    pub fn from_raw(t: f64, x: f64, raw_temp: f64, raw_precip: f64) -> Self {
        let event_intensity =
            if raw_temp > EVENT_TEMP_THRESHOLD && raw_precip > EVENT_PRECIP_THRESHOLD {
                EVENT_BASE + EVENT_BOOST
            } else {
                EVENT_BASE
            };
        Self {
            t,
            x,
            base_flow: (t * std::f64::consts::PI * 10.0).sin() * 15.0,
            temperature_amplitude: (raw_temp - 15.0) * 5.0,
            precipitation_amplitude: (raw_precip / 100.0) * 15.0,
            event_intensity,
            event_amplitude: event_intensity * 20.0,
            raw_temp,
            raw_precip,
        }
    }
}

/// `steps + 1` dense samples spanning the data width.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DenseField {
    samples: Vec<DenseSample>,
    steps: usize,
    padding_x: f64,
    effective_width: f64,
}

impl DenseField {
    /// Sample `records` at `steps + 1` evenly spaced positions.
    ///
    /// Pure: identical input produces bit-identical output.
    #[tracing::instrument(skip(records), fields(records = records.len()))]
    pub fn build(
        records: &[Record],
        steps: usize,
        padding_x: f64,
        effective_width: f64,
    ) -> DriftlineResult<Self> {
        if records.len() < 2 {
            return Err(DriftlineError::degenerate(format!(
                "dense sampling needs at least 2 records, got {}",
                records.len()
            )));
        }
        if steps == 0 {
            return Err(DriftlineError::validation("dense steps must be > 0"));
        }

        let last = records.len() - 1;
        let samples = (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let float_index = t * last as f64;
                let idx1 = (float_index.floor() as usize).min(last);
                let idx2 = (idx1 + 1).min(last);
                let ratio = float_index - idx1 as f64;
                let (a, b) = (&records[idx1], &records[idx2]);
                DenseSample::from_raw(
                    t,
                    padding_x + t * effective_width,
                    lerp(a.temperature, b.temperature, ratio),
                    lerp(a.precipitation, b.precipitation, ratio),
                )
            })
            .collect();

        Ok(Self {
            samples,
            steps,
            padding_x,
            effective_width,
        })
    }

    pub fn samples(&self) -> &[DenseSample] {
        &self.samples
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sample at or before virtual `x`, clamped to the ends.
    pub fn sample_at_x(&self, x: f64) -> &DenseSample {
        let ratio = ((x - self.padding_x) / self.effective_width).clamp(0.0, 1.0);
        self.sample_at_ratio(ratio)
    }

    /// Sample under an unrounded record index, as used by the indicator sprite.
    pub fn sample_for_raw_index(&self, raw_index: f64, record_count: usize) -> &DenseSample {
        let denom = record_count.saturating_sub(1).max(1) as f64;
        let ratio = (raw_index / denom).clamp(0.0, 1.0);
        self.sample_at_ratio(ratio)
    }

    fn sample_at_ratio(&self, ratio: f64) -> &DenseSample {
        let i = if ratio.is_nan() {
            0
        } else {
            ((ratio * self.steps as f64).floor() as usize).min(self.steps)
        };
        &self.samples[i]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fields/dense.rs"]
mod tests;
