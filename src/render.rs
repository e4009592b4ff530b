//! Per-frame draw planning and the software rasterizer that executes it.

pub mod backend;
pub mod blur;
pub mod composite;
pub mod cpu;
pub mod paint;
pub mod plan;
pub mod scene;
pub mod text;

pub use backend::{FrameRGBA, LayerBackend, execute_plan};
pub use cpu::{CpuBackend, CpuSettings};
pub use paint::{GradientStop, Paint};
pub use plan::{
    BlendMode, DrawOp, FramePlan, FrameSnapshot, Glow, LayerScene, PlanSummary, SceneSummary,
    SpriteInfo,
};
