use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{DriftlineError, DriftlineResult};

/// Engine tuning and virtual-canvas geometry.
///
/// Defaults reproduce the reference look. The easing constants are applied once per frame and are
/// not compensated for frame duration, so animation speed follows the display refresh rate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub padding_x: f64,
    pub effective_width: f64,
    pub height: f64,
    pub dense_steps: usize,
    pub harvest_constant: f64,
    pub lens_radius: f64,
    pub overscan: f64,
    pub scroll_ease: f64,
    pub snap_threshold: f64,
    pub indicator_ease: f64,
    pub ribbon_step: f64,
    pub time_divisor_ms: f64,
    /// Seed for the randomized cloud fields. `None` picks one per load.
    pub seed: Option<u64>,
    /// Font used for axis labels; the system sans-serif family is used when unset.
    pub font_path: Option<PathBuf>,
    /// Cloud sprite bitmap; a generated sprite is used when unset.
    pub cloud_sprite: Option<PathBuf>,
    /// Indicator sprite bitmap; a generated sprite is used when unset.
    pub indicator_sprite: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            padding_x: 200.0,
            effective_width: 4000.0,
            height: 600.0,
            dense_steps: 800,
            harvest_constant: 1_500_000.0,
            lens_radius: 250.0,
            overscan: 100.0,
            scroll_ease: 0.05,
            snap_threshold: 0.5,
            indicator_ease: 0.15,
            ribbon_step: 0.03,
            time_divisor_ms: 300.0,
            seed: None,
            font_path: None,
            cloud_sprite: None,
            indicator_sprite: None,
        }
    }
}

impl EngineConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> DriftlineResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn total_width(&self) -> f64 {
        self.effective_width + self.padding_x * 2.0
    }

    /// Vertical center line of the flow layers.
    pub fn base_center_y(&self) -> f64 {
        self.height / 2.0 + 50.0
    }

    pub fn validate(&self) -> DriftlineResult<()> {
        let positive = [
            ("effective_width", self.effective_width),
            ("height", self.height),
            ("harvest_constant", self.harvest_constant),
            ("lens_radius", self.lens_radius),
            ("time_divisor_ms", self.time_divisor_ms),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(DriftlineError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        let non_negative = [
            ("padding_x", self.padding_x),
            ("overscan", self.overscan),
            ("snap_threshold", self.snap_threshold),
            ("ribbon_step", self.ribbon_step),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(DriftlineError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, v) in [
            ("scroll_ease", self.scroll_ease),
            ("indicator_ease", self.indicator_ease),
        ] {
            if !(v > 0.0 && v <= 1.0) {
                return Err(DriftlineError::validation(format!("{name} must be in (0, 1]")));
            }
        }
        if self.dense_steps == 0 {
            return Err(DriftlineError::validation("dense_steps must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
