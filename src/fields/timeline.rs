//! Shared index ↔ x mapping for every layer.

use crate::foundation::error::{DriftlineError, DriftlineResult};

/// Linear placement of `len` records across the data span of the virtual canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    len: usize,
    padding_x: f64,
    effective_width: f64,
}

impl Timeline {
    pub fn new(len: usize, padding_x: f64, effective_width: f64) -> DriftlineResult<Self> {
        if len < 2 {
            return Err(DriftlineError::degenerate(format!(
                "timeline needs at least 2 records, got {len}"
            )));
        }
        if !(effective_width.is_finite() && effective_width > 0.0) {
            return Err(DriftlineError::validation(
                "timeline effective width must be finite and > 0",
            ));
        }
        Ok(Self {
            len,
            padding_x,
            effective_width,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true; a timeline has at least two entries.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn padding_x(&self) -> f64 {
        self.padding_x
    }

    pub fn effective_width(&self) -> f64 {
        self.effective_width
    }

    /// Width of the whole virtual canvas, padding included.
    pub fn total_width(&self) -> f64 {
        self.effective_width + self.padding_x * 2.0
    }

    /// Distance between consecutive records.
    pub fn spacing(&self) -> f64 {
        self.effective_width / (self.len - 1) as f64
    }

    pub fn x(&self, index: usize) -> f64 {
        self.padding_x + (index as f64 / (self.len - 1) as f64) * self.effective_width
    }

    /// Unrounded index position of a virtual x.
    pub fn raw_index(&self, x: f64) -> f64 {
        (x - self.padding_x) / self.spacing()
    }

    /// Nearest record to `x`, clamped to `[0, len - 1]`.
    pub fn index_at(&self, x: f64) -> usize {
        let raw = self.raw_index(x).round();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.len - 1)
        }
    }

    /// Whether `x` lies inside the data span (padding excluded).
    pub fn contains(&self, x: f64) -> bool {
        x >= self.padding_x && x <= self.padding_x + self.effective_width
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fields/timeline.rs"]
mod tests;
