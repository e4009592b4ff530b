//! Dataset-derived, read-only fields consumed by the layer renderers.

/// Procedural animation parameters for sentiment clouds.
pub mod cloud;
/// Dense interpolated samples for the flow layer.
pub mod dense;
/// Harvest bars and bar-chart layout.
pub mod harvest;
/// Index ↔ x mapping.
pub mod timeline;
/// Price points and scale.
pub mod wave;

use crate::config::EngineConfig;
use crate::data::record::Dataset;
use crate::foundation::error::DriftlineResult;
use crate::foundation::math::RandomSource;

use self::cloud::InflationPoint;
use self::dense::DenseField;
use self::harvest::{HarvestBar, LinearBarLayout};
use self::timeline::Timeline;
use self::wave::{ValueScale, WavePoint};

/// Every field derived from one dataset load.
#[derive(Clone, Debug)]
pub struct LayerFields {
    pub timeline: Timeline,
    pub dense: DenseField,
    pub wave: Vec<WavePoint>,
    pub value_scale: ValueScale,
    pub clouds: Vec<InflationPoint>,
    pub harvest: Vec<HarvestBar>,
    pub bar_layout: LinearBarLayout,
}

impl LayerFields {
    /// Run every builder. Fails on degenerate records before any frame is drawn.
    #[tracing::instrument(skip_all, fields(records = dataset.len()))]
    pub fn build(
        dataset: &Dataset,
        cfg: &EngineConfig,
        rng: &mut dyn RandomSource,
    ) -> DriftlineResult<Self> {
        let records = dataset.records();
        let timeline = Timeline::new(records.len(), cfg.padding_x, cfg.effective_width)?;
        let dense =
            DenseField::build(records, cfg.dense_steps, cfg.padding_x, cfg.effective_width)?;
        let harvest = harvest::build_harvest_bars(records, &timeline, cfg.harvest_constant)?;
        let bar_layout = LinearBarLayout::for_bars(cfg.height, &harvest);
        let wave = wave::build_wave_points(records, &timeline);
        let clouds = cloud::build_inflation_points(records, &timeline, cfg.height, rng);
        tracing::debug!(
            dense = dense.samples().len(),
            axis_max = bar_layout.axis_max(),
            "layer fields built"
        );
        Ok(Self {
            timeline,
            dense,
            wave,
            value_scale: ValueScale::new(cfg.height),
            clouds,
            harvest,
            bar_layout,
        })
    }
}
