//! Session state for one loaded dataset and the loop that renders it.

pub mod context;
pub mod frame_loop;

pub use context::Engine;
pub use frame_loop::{FrameHost, LoopHandle, LoopReport, RenderLoop, ScriptedHost};
