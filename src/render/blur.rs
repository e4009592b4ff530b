use crate::foundation::error::{DriftlineError, DriftlineResult};

/// Glow blur parameters derived from a CSS-style `shadowBlur` amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurSpec {
    pub radius: u32,
    pub sigma: f32,
}

impl BlurSpec {
    /// `shadowBlur = b` maps to a Gaussian with `sigma = b / 2`, truncated at three sigma.
    pub fn from_shadow_blur(blur: f64) -> Option<Self> {
        if !blur.is_finite() || blur <= 0.0 {
            return None;
        }
        let sigma = blur / 2.0;
        Some(Self {
            radius: (sigma * 3.0).ceil() as u32,
            sigma: sigma as f32,
        })
    }
}

/// Separable Gaussian blur over a premultiplied RGBA8 buffer. Edges clamp, so callers that need
/// a transparent falloff pad the buffer by `radius` first.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> DriftlineResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| DriftlineError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(DriftlineError::render(
            "blur expects a buffer of width*height*4 bytes",
        ));
    }
    if radius == 0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let kernel = Kernel::gaussian(radius, sigma)?;
    let (w, h) = (width as usize, height as usize);
    let mut rows = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    // Rows: pixels step by 1, lines by `w`. Columns: pixels step by `w`, lines by 1.
    kernel.convolve(src, &mut rows, Lines { count: h, len: w, stride: w, step: 1 });
    kernel.convolve(&rows, &mut out, Lines { count: w, len: h, stride: 1, step: w });
    Ok(out)
}

/// A family of 1-D pixel runs inside a row-major buffer, in pixel units.
#[derive(Clone, Copy)]
struct Lines {
    count: usize,
    len: usize,
    stride: usize,
    step: usize,
}

/// Normalized 1-D Gaussian weights, `2 * radius + 1` taps.
struct Kernel {
    taps: Vec<f32>,
}

impl Kernel {
    fn gaussian(radius: u32, sigma: f32) -> DriftlineResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(DriftlineError::validation("blur sigma must be > 0"));
        }
        let r = i64::from(radius);
        let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
        let raw: Vec<f64> = (-r..=r)
            .map(|d| (-((d * d) as f64) / two_sigma_sq).exp())
            .collect();
        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return Err(DriftlineError::render("gaussian kernel sum is zero"));
        }
        Ok(Self {
            taps: raw.into_iter().map(|v| (v / total) as f32).collect(),
        })
    }

    fn radius(&self) -> usize {
        self.taps.len() / 2
    }

    /// Blur every line of `src` into `dst`, clamping reads at the line ends.
    fn convolve(&self, src: &[u8], dst: &mut [u8], lines: Lines) {
        let r = self.radius();
        let last = lines.len - 1;
        for line in 0..lines.count {
            let base = line * lines.stride;
            let at = |i: usize| (base + i * lines.step) * 4;
            for i in 0..lines.len {
                let mut sum = [0.0f32; 4];
                for (t, &weight) in self.taps.iter().enumerate() {
                    let j = (i + t).saturating_sub(r).min(last);
                    let px = &src[at(j)..at(j) + 4];
                    for (acc, &v) in sum.iter_mut().zip(px) {
                        *acc += weight * f32::from(v);
                    }
                }
                let o = at(i);
                for (d, acc) in dst[o..o + 4].iter_mut().zip(sum) {
                    *d = acc.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
