use crate::assets::procedural;
use crate::assets::sprite::{Sprite, SpriteSheet, SpriteSlot};
use crate::config::EngineConfig;
use crate::data::provider::DataProvider;
use crate::data::record::Dataset;
use crate::fields::LayerFields;
use crate::foundation::core::{Point, Window};
use crate::foundation::error::DriftlineResult;
use crate::foundation::math::Rng64;
use crate::interaction::hover::{self, Hover, Lens, PointerEvent};
use crate::interaction::indicator::{self, Indicator};
use crate::interaction::tooltip::{Tooltip, format_tooltip};
use crate::layers::LayerToggles;
use crate::render::plan::{FramePlan, FrameSnapshot, SpriteInfo};
use crate::render::scene::build_scenes;
use crate::viewport::ViewportController;

/// Where the indicator waits before the first hover.
const INDICATOR_PARK: (f64, f64) = (-100.0, -100.0);

/// Everything one rendering session owns.
///
/// Fields are built once from the dataset and never change. Pointer events only move targets and
/// flags; all easing happens in [`Engine::frame`].
#[derive(Debug)]
pub struct Engine {
    cfg: EngineConfig,
    dataset: Dataset,
    fields: LayerFields,
    viewport: ViewportController,
    hover: Option<Hover>,
    indicator: Indicator,
    ribbon_time: f64,
    time: f64,
    toggles: LayerToggles,
    indicator_sprite: SpriteSlot,
    cloud_sprite: SpriteSlot,
    tooltip: Option<Tooltip>,
}

impl Engine {
    /// Build every field from `dataset`. Degenerate records fail here, before any frame.
    #[tracing::instrument(skip_all, fields(records = dataset.len()))]
    pub fn new(dataset: Dataset, cfg: EngineConfig, window: Window) -> DriftlineResult<Self> {
        cfg.validate()?;
        let mut rng = match cfg.seed {
            Some(seed) => Rng64::new(seed),
            None => Rng64::from_clock(),
        };
        let fields = LayerFields::build(&dataset, &cfg, &mut rng)?;
        let viewport = ViewportController::new(
            cfg.total_width(),
            window.width,
            cfg.scroll_ease,
            cfg.snap_threshold,
            cfg.overscan,
        );
        let indicator = Indicator::new(INDICATOR_PARK.0, INDICATOR_PARK.1, cfg.indicator_ease);
        let indicator_sprite =
            sprite_slot(cfg.indicator_sprite.as_deref(), procedural::indicator_sprite);
        let cloud_sprite = sprite_slot(cfg.cloud_sprite.as_deref(), procedural::cloud_sprite);
        tracing::info!(
            total_width = cfg.total_width(),
            window_width = window.width,
            "engine started"
        );
        Ok(Self {
            cfg,
            dataset,
            fields,
            viewport,
            hover: None,
            indicator,
            ribbon_time: 0.0,
            time: 0.0,
            toggles: LayerToggles::default(),
            indicator_sprite,
            cloud_sprite,
            tooltip: None,
        })
    }

    /// Load through `provider` and start. A provider failure means no engine.
    pub fn load(
        provider: &dyn DataProvider,
        cfg: EngineConfig,
        window: Window,
    ) -> DriftlineResult<Self> {
        let dataset = provider.load()?;
        Self::new(dataset, cfg, window)
    }

    /// Advance every animation by one frame and plan it.
    pub fn frame(&mut self, now_ms: f64, window: Window) -> FramePlan {
        self.indicator_sprite.poll();
        self.cloud_sprite.poll();

        self.time = now_ms / self.cfg.time_divisor_ms;
        self.viewport.resize(window.width);
        let scroll = self.viewport.advance();

        let indicator_live = self.hover.is_some() && self.toggles.weather;
        if indicator_live {
            self.indicator.advance();
        }

        let sprites = SpriteSheet {
            indicator: self.indicator_sprite.sprite().cloned(),
            cloud: self.cloud_sprite.sprite().cloned(),
        };
        let snapshot = FrameSnapshot {
            time: self.time,
            scroll,
            window,
            visible: self.viewport.visible_range(),
            hover: self.hover,
            lens: Lens::for_hover(self.hover.as_ref(), self.cfg.lens_radius),
            ribbon_time: self.ribbon_time,
            toggles: self.toggles,
            axis_owner: self.toggles.axis_owner(),
            indicator: indicator_live.then_some(self.indicator),
            height: self.cfg.height,
            base_center_y: self.cfg.base_center_y(),
            sprites: SpriteInfo::from_sheet(&sprites),
        };
        let scenes = build_scenes(&self.fields, &snapshot);

        if self.toggles.harvest {
            self.ribbon_time += self.cfg.ribbon_step;
        }

        FramePlan {
            // The canvas is bottom-aligned in the window; the host places it.
            canvas: Window::new(window.width, self.cfg.height).canvas(),
            snapshot,
            scenes,
            presentation: self.toggles.presentation(),
            tooltip: self.tooltip.clone(),
            sprites,
        }
    }

    /// Track the pointer: scroll target, hover, indicator target and tooltip.
    pub fn pointer_move(&mut self, screen: Point, window: Window) {
        self.viewport.resize(window.width);
        self.viewport.set_target(screen.x / window.width);
        let (vx, vy) =
            hover::to_virtual(screen, self.viewport.current(), window, self.cfg.height);
        self.hover = hover::resolve(&self.fields.timeline, screen, vx, vy);

        if let Some(h) = self.hover
            && self.toggles.weather
        {
            let sample = self
                .fields
                .dense
                .sample_for_raw_index(h.raw_index, self.dataset.len());
            let surface = indicator::surface_y(sample, self.cfg.base_center_y(), self.time);
            self.indicator.aim(vx, vy, surface, self.cfg.height);
        }
        self.refresh_tooltip();
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
        self.tooltip = None;
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, window: Window) {
        match event {
            PointerEvent::Move { x, y } => self.pointer_move(Point::new(x, y), window),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    pub fn set_toggles(&mut self, toggles: LayerToggles) {
        self.toggles = toggles;
        self.refresh_tooltip();
    }

    /// Place the viewport at `ratio` of its scroll range immediately.
    pub fn jump_to(&mut self, ratio: f64) {
        self.viewport.jump_to(ratio);
    }

    fn refresh_tooltip(&mut self) {
        self.tooltip = self.hover.and_then(|h| {
            let record = self.dataset.get(h.index)?;
            let harvest = self
                .fields
                .harvest
                .iter()
                .find(|b| b.index == h.index)
                .map(|b| b.value);
            format_tooltip(record, harvest, &self.toggles, h.screen)
        });
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn fields(&self) -> &LayerFields {
        &self.fields
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn hover(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    pub fn ribbon_time(&self) -> f64 {
        self.ribbon_time
    }

    /// Animation time of the last planned frame.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn toggles(&self) -> LayerToggles {
        self.toggles
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn sprites_decoded(&self) -> (bool, bool) {
        (
            self.indicator_sprite.is_decoded(),
            self.cloud_sprite.is_decoded(),
        )
    }
}

/// Decode `path` in the background, or generate the fallback sprite now.
fn sprite_slot(
    path: Option<&std::path::Path>,
    fallback: fn() -> DriftlineResult<Sprite>,
) -> SpriteSlot {
    if let Some(path) = path {
        return SpriteSlot::spawn_decode(path);
    }
    match fallback() {
        Ok(sprite) => SpriteSlot::ready(sprite),
        Err(e) => {
            tracing::warn!(error = %e, "generated sprite unavailable");
            SpriteSlot::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/context.rs"]
mod tests;
