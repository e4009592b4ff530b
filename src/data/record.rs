use chrono::{Datelike, NaiveDate};

use crate::foundation::error::{DriftlineError, DriftlineResult};

/// One calendar month of observations.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    /// Mean temperature in °C.
    pub temperature: f64,
    /// Precipitation in mm.
    pub precipitation: f64,
    /// Market price in currency units; must be > 0 for the harvest layer.
    pub price: f64,
    /// Sentiment score in `[0, 1]`.
    pub sentiment: f64,
}

impl Record {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// `YYYY-MM-DD`, the label shown in the tooltip header.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Parallel column form supplied by data providers.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Columns {
    pub dates: Vec<NaiveDate>,
    #[serde(alias = "temps")]
    pub temperature: Vec<f64>,
    #[serde(alias = "precips")]
    pub precipitation: Vec<f64>,
    #[serde(alias = "prices")]
    pub price: Vec<f64>,
    #[serde(alias = "sentiments")]
    pub sentiment: Vec<f64>,
}

/// Validated, date-ordered records. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Zip parallel columns into records, failing fast on anything the preprocessors cannot use.
    ///
    /// Prices are *not* checked here; the harvest builder owns that invariant.
    pub fn from_columns(columns: Columns) -> DriftlineResult<Self> {
        let n = columns.dates.len();
        let lens = [
            ("temperature", columns.temperature.len()),
            ("precipitation", columns.precipitation.len()),
            ("price", columns.price.len()),
            ("sentiment", columns.sentiment.len()),
        ];
        for (name, len) in lens {
            if len != n {
                return Err(DriftlineError::degenerate(format!(
                    "column '{name}' has {len} values but there are {n} dates"
                )));
            }
        }

        let records = (0..n)
            .map(|i| Record {
                date: columns.dates[i],
                temperature: columns.temperature[i],
                precipitation: columns.precipitation[i],
                price: columns.price[i],
                sentiment: columns.sentiment[i],
            })
            .collect();
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<Record>) -> DriftlineResult<Self> {
        if records.len() < 2 {
            return Err(DriftlineError::degenerate(format!(
                "at least 2 records are required, got {}",
                records.len()
            )));
        }

        for (i, r) in records.iter().enumerate() {
            let values = [r.temperature, r.precipitation, r.price, r.sentiment];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(DriftlineError::degenerate(format!(
                    "record {i} ({}) has a non-finite value",
                    r.date
                )));
            }
            if !(0.0..=1.0).contains(&r.sentiment) {
                return Err(DriftlineError::degenerate(format!(
                    "record {i} sentiment {} is outside [0, 1]",
                    r.sentiment
                )));
            }
        }

        if let Some(w) = records.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(DriftlineError::degenerate(format!(
                "records must be strictly ascending by date ({} is followed by {})",
                w[0].date, w[1].date
            )));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/record.rs"]
mod tests;
