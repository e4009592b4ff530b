//! Eased horizontal scrolling of the virtual canvas inside the host window.

/// Scroll state bounded to `[0, max(0, total_width - window_width)]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ViewportController {
    total_width: f64,
    window_width: f64,
    current: f64,
    target: f64,
    ease: f64,
    snap: f64,
    overscan: f64,
}

impl ViewportController {
    pub fn new(total_width: f64, window_width: f64, ease: f64, snap: f64, overscan: f64) -> Self {
        Self {
            total_width,
            window_width: window_width.max(0.0),
            current: 0.0,
            target: 0.0,
            ease,
            snap,
            overscan,
        }
    }

    pub fn max_scroll(&self) -> f64 {
        (self.total_width - self.window_width).max(0.0)
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn window_width(&self) -> f64 {
        self.window_width
    }

    /// Point the scroll target at `ratio` of the scrollable range; `ratio` is clamped to `[0, 1]`.
    pub fn set_target(&mut self, ratio: f64) {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self.target = ratio * self.max_scroll();
    }

    /// Move both target and current to `ratio` without easing.
    pub fn jump_to(&mut self, ratio: f64) {
        self.set_target(ratio);
        self.current = self.target;
    }

    /// Step `current` toward `target` once. Snaps when within the threshold.
    ///
    /// The closure is per call, not per second: faster displays scroll faster.
    pub fn advance(&mut self) -> f64 {
        let diff = self.target - self.current;
        if diff.abs() > self.snap {
            self.current += diff * self.ease;
        } else {
            self.current = self.target;
        }
        self.current
    }

    /// Virtual x range worth drawing this frame.
    pub fn visible_range(&self) -> (f64, f64) {
        (
            self.current - self.overscan,
            self.current + self.window_width + self.overscan,
        )
    }

    /// Adopt a new window width, re-clamping both scroll values.
    pub fn resize(&mut self, window_width: f64) {
        if window_width == self.window_width {
            return;
        }
        self.window_width = window_width.max(0.0);
        let max = self.max_scroll();
        self.target = self.target.clamp(0.0, max);
        self.current = self.current.clamp(0.0, max);
    }
}

#[cfg(test)]
#[path = "../tests/unit/viewport.rs"]
mod tests;
