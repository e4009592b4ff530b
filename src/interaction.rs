//! Pointer handling: hover resolution, lens distortion, the indicator sprite and tooltips.
//!
//! Handlers here only record targets and flags; drawing happens in the frame loop.

pub mod hover;
pub mod indicator;
pub mod tooltip;
