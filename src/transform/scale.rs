//! Continuous scales mapping data values to pixels.

/// Linear map from `domain` to `range`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    /// Clamp outputs to the range endpoints.
    pub clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    pub fn clamped(self) -> Self {
        Self {
            clamp: true,
            ..self
        }
    }

    /// Normalized position of `v` within the domain (unclamped unless the scale clamps).
    pub fn normalize(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        if self.clamp { t.clamp(0.0, 1.0) } else { t }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + (r1 - r0) * self.normalize(v)
    }
}

/// Square-root scale: linear in `sqrt(v)`, so areas grow linearly with the value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SqrtScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        fn signed_sqrt(x: f64) -> f64 {
            x.signum() * x.abs().sqrt()
        }
        let inner = LinearScale::new(
            (signed_sqrt(self.domain.0), signed_sqrt(self.domain.1)),
            self.range,
        );
        inner.apply(signed_sqrt(v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/scale.rs"]
mod tests;
