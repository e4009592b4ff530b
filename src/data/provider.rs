use std::path::{Path, PathBuf};

use crate::{
    data::record::{Columns, Dataset},
    foundation::error::{DriftlineError, DriftlineResult},
};

/// Supplies the aligned monthly records the engine is built from.
///
/// A provider failure is fatal to initialization: the engine never starts on partial data.
pub trait DataProvider {
    fn load(&self) -> DriftlineResult<Dataset>;
}

/// Reads the parallel-array JSON layout (`dates`, `temperature`, `precipitation`, `price`,
/// `sentiment`) from disk.
#[derive(Clone, Debug)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for JsonFileProvider {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> DriftlineResult<Dataset> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            DriftlineError::provider(format!("read '{}': {e}", self.path.display()))
        })?;
        let dataset = parse_columns_json(&bytes)?;
        tracing::debug!(records = dataset.len(), "dataset loaded");
        Ok(dataset)
    }
}

/// Serves columns already held in memory.
#[derive(Clone, Debug)]
pub struct StaticProvider {
    columns: Columns,
}

impl StaticProvider {
    pub fn new(columns: Columns) -> Self {
        Self { columns }
    }
}

impl DataProvider for StaticProvider {
    fn load(&self) -> DriftlineResult<Dataset> {
        Dataset::from_columns(self.columns.clone())
    }
}

/// Parse the JSON column layout. Malformed JSON is a provider error; well-formed but unusable
/// columns are degenerate input.
pub fn parse_columns_json(bytes: &[u8]) -> DriftlineResult<Dataset> {
    let columns: Columns = serde_json::from_slice(bytes)
        .map_err(|e| DriftlineError::provider(format!("malformed dataset json: {e}")))?;
    Dataset::from_columns(columns)
}

#[cfg(test)]
#[path = "../../tests/unit/data/provider.rs"]
mod tests;
