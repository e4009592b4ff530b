/// Convenience result type used across driftline.
pub type DriftlineResult<T> = Result<T, DriftlineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DriftlineError {
    /// The data provider could not be reached or returned malformed data.
    #[error("provider error: {0}")]
    Provider(String),

    /// Records that cannot be preprocessed (too few rows, non-positive prices, NaN, ...).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Invalid configuration or caller-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while rasterizing or compositing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Sprite or font files that could not be read or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DriftlineError {
    /// Build a [`DriftlineError::Provider`] value.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Build a [`DriftlineError::DegenerateInput`] value.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }

    /// Build a [`DriftlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DriftlineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DriftlineError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`DriftlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error is fatal to engine initialization (provider or degenerate input).
    pub fn is_init_failure(&self) -> bool {
        matches!(self, Self::Provider(_) | Self::DegenerateInput(_))
    }
}

impl From<serde_json::Error> for DriftlineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
