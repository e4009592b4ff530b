//! Scales, color ramps and curve construction shared by the field builders and layers.

/// Sequential color ramps.
pub mod color;
/// Smooth curves (B-spline, Catmull-Rom) through sample points.
pub mod curve;
/// Linear and square-root scales.
pub mod scale;
