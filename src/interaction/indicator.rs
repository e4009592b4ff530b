use crate::fields::dense::DenseSample;

/// Horizontal orientation of the indicator sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Facing {
    Left,
    Right,
}

/// Floating sprite that chases the pointer along the flow surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Indicator {
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub facing: Facing,
    ease: f64,
}

/// Hysteresis around the sprite before it turns.
const TURN_DEADBAND: f64 = 5.0;
/// Lowest point the sprite may dive to, measured from the canvas bottom.
const FLOOR_MARGIN: f64 = 30.0;

/// Top of the event pass at a dense sample, ignoring the lens.
pub fn surface_y(sample: &DenseSample, base_center_y: f64, time: f64) -> f64 {
    base_center_y + sample.base_flow + (sample.t * 5.0 + time * 0.5).sin() * 10.0
        - (15.0 + sample.temperature_amplitude * 0.35)
}

impl Indicator {
    pub fn new(x: f64, y: f64, ease: f64) -> Self {
        Self {
            x,
            y,
            target_x: x,
            target_y: y,
            facing: Facing::Right,
            ease,
        }
    }

    /// Aim at the pointer, kept between the flow surface and the canvas floor.
    pub fn aim(&mut self, virtual_x: f64, virtual_y: f64, surface_y: f64, canvas_height: f64) {
        self.target_x = virtual_x;
        self.target_y = surface_y.max(virtual_y.min(canvas_height - FLOOR_MARGIN));
        if virtual_x > self.x + TURN_DEADBAND {
            self.facing = Facing::Right;
        }
        if virtual_x < self.x - TURN_DEADBAND {
            self.facing = Facing::Left;
        }
    }

    /// One easing step toward the target.
    pub fn advance(&mut self) {
        self.x += (self.target_x - self.x) * self.ease;
        self.y += (self.target_y - self.y) * self.ease;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/indicator.rs"]
mod tests;
