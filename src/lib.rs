//! Driftline renders a scrolling, multi-layer, procedurally animated time series.
//!
//! Monthly records are turned once into read-only fields. Each frame an [`Engine`] eases its
//! viewport and pointer state and plans one immutable scene per enabled layer:
//!
//! - Load a [`Dataset`] through a [`DataProvider`]
//! - Create an [`Engine`] and feed it pointer events
//! - Execute each [`FramePlan`] on a [`LayerBackend`] such as [`CpuBackend`], or drive the whole
//!   cycle with a [`RenderLoop`]
#![forbid(unsafe_code)]

pub mod assets;
pub mod config;
pub mod data;
pub mod engine;
pub mod fields;
pub mod foundation;
pub mod interaction;
pub mod layers;
pub mod render;
pub mod transform;
pub mod viewport;

pub use crate::config::EngineConfig;
pub use crate::data::provider::{DataProvider, JsonFileProvider, StaticProvider};
pub use crate::data::record::{Columns, Dataset, Record};
pub use crate::engine::{Engine, FrameHost, LoopHandle, LoopReport, RenderLoop, ScriptedHost};
pub use crate::foundation::core::{Canvas, Point, Rgba, Window};
pub use crate::foundation::error::{DriftlineError, DriftlineResult};
pub use crate::interaction::hover::PointerEvent;
pub use crate::interaction::tooltip::{Tooltip, TooltipLine};
pub use crate::layers::{LayerKind, LayerToggles, Presentation};
pub use crate::render::{CpuBackend, CpuSettings, FramePlan, FrameRGBA, LayerBackend, execute_plan};
