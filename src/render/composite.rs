//! Software compositing of premultiplied RGBA8 buffers.

use crate::foundation::error::{DriftlineError, DriftlineResult};
use crate::foundation::math::mul_div255_u8;

use super::plan::BlendMode;

pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel, with `src` faded by `opacity` first.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let fade = opacity_u8(opacity);
    let src = src.map(|c| mul_div255_u8(u16::from(c), fade));
    if src[3] == 0 {
        return dst;
    }
    let keep = 255 - u16::from(src[3]);
    std::array::from_fn(|i| src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), keep)))
}

fn opacity_u8(opacity: f32) -> u16 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u16
}

/// Composite `src` onto `dst` (equal-length premultiplied buffers) with a blend mode.
pub fn blend_in_place(
    dst: &mut [u8],
    src: &[u8],
    opacity: f32,
    mode: BlendMode,
) -> DriftlineResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(DriftlineError::render(
            "compositing expects equal-length rgba8 buffers",
        ));
    }
    // Dispatch once per buffer; each arm monomorphizes its own kernel.
    match mode {
        BlendMode::Normal => {
            for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
                d.copy_from_slice(&out);
            }
        }
        BlendMode::Multiply => blend_kernel(dst, src, opacity, |s, d| s * d),
        BlendMode::Screen => blend_kernel(dst, src, opacity, |s, d| s + d - s * d),
        BlendMode::HardLight => blend_kernel(dst, src, opacity, |s, d| {
            if s <= 0.5 {
                2.0 * s * d
            } else {
                1.0 - 2.0 * (1.0 - s) * (1.0 - d)
            }
        }),
        BlendMode::TintInside => source_in(dst, src, opacity),
    }
    Ok(())
}

/// Recolor every covered pixel of `buf` with `color`, keeping its alpha mask.
pub fn tint_inside(buf: &mut [u8], color: crate::foundation::core::Rgba) {
    let tint = color.to_premul();
    let t = [tint.r, tint.g, tint.b, tint.a];
    for px in buf.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in 0..4 {
            px[c] = mul_div255_u8(u16::from(t[c]), a);
        }
    }
}

fn source_in(dst: &mut [u8], src: &[u8], opacity: f32) {
    let op = opacity_u8(opacity);
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let da = u16::from(d[3]);
        for c in 0..4 {
            d[c] = mul_div255_u8(u16::from(mul_div255_u8(u16::from(s[c]), op)), da);
        }
    }
}

#[inline(always)]
fn blend_kernel<F>(dst: &mut [u8], src: &[u8], opacity: f32, blend_fn: F)
where
    F: Fn(f32, f32) -> f32,
{
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        // out_a = sa + da * (1 - sa)
        // out_p = sp * (1 - da) + dp * (1 - sa) + B(sc, dc) * sa * da
        let sa = f32::from(s[3]) / 255.0 * opacity;
        if sa <= 0.0 {
            continue;
        }
        let da = f32::from(d[3]) / 255.0;
        let out_a = (sa + da * (1.0 - sa)).clamp(0.0, 1.0);

        for c in 0..3 {
            let sp = f32::from(s[c]) / 255.0 * opacity;
            let dp = f32::from(d[c]) / 255.0;
            let sc = (sp / sa).clamp(0.0, 1.0);
            let dc = if da > 0.0 { (dp / da).clamp(0.0, 1.0) } else { 0.0 };
            let b = blend_fn(sc, dc).clamp(0.0, 1.0);
            let out = sp * (1.0 - da) + dp * (1.0 - sa) + b * sa * da;
            d[c] = (out.min(out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
        }
        d[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
