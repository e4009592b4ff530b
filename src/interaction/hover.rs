use crate::fields::timeline::Timeline;
use crate::foundation::core::{Point, Window};

/// Pointer position in host-window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Leave,
}

/// A resolved hover over the data span.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Hover {
    pub screen: Point,
    pub virtual_x: f64,
    pub virtual_y: f64,
    /// Unrounded record position.
    pub raw_index: f64,
    pub index: usize,
}

/// Map a window position into virtual-canvas coordinates.
///
/// The canvas is bottom-aligned in the window; when the pointer is above it, the window y is used
/// unchanged.
pub fn to_virtual(screen: Point, scroll: f64, window: Window, canvas_height: f64) -> (f64, f64) {
    let vx = scroll + screen.x;
    let vy = screen.y - (window.height - canvas_height);
    (vx, if vy < 0.0 { screen.y } else { vy })
}

/// Resolve a virtual position to a record, or `None` when outside the data span.
pub fn resolve(timeline: &Timeline, screen: Point, virtual_x: f64, virtual_y: f64) -> Option<Hover> {
    if !timeline.contains(virtual_x) {
        return None;
    }
    Some(Hover {
        screen,
        virtual_x,
        virtual_y,
        raw_index: timeline.raw_index(virtual_x),
        index: timeline.index_at(virtual_x),
    })
}

/// Gaussian magnification centred on the hovered x.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Lens {
    center: Option<f64>,
    radius: f64,
}

impl Lens {
    /// Extra scale contributed at full lens weight.
    pub const GAIN: f64 = 0.65;

    pub fn new(center: Option<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn inactive(radius: f64) -> Self {
        Self::new(None, radius)
    }

    pub fn for_hover(hover: Option<&Hover>, radius: f64) -> Self {
        Self::new(hover.map(|h| h.virtual_x), radius)
    }

    pub fn is_active(&self) -> bool {
        self.center.is_some()
    }

    /// Weight in `[0, 1]` at `x`; zero outside the radius or when inactive.
    pub fn weight(&self, x: f64) -> f64 {
        let Some(c) = self.center else {
            return 0.0;
        };
        let d = (x - c).abs();
        if d >= self.radius {
            return 0.0;
        }
        let sigma = self.radius / 2.5;
        (-(d * d) / (2.0 * sigma * sigma)).exp()
    }

    /// Amplitude scale at `x`: `0.35` at rest, up to `1.0` under the pointer.
    pub fn scale(&self, x: f64) -> f64 {
        0.35 + self.weight(x) * Self::GAIN
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/hover.rs"]
mod tests;
