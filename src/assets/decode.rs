use std::sync::Arc;

use crate::assets::sprite::Sprite;
use crate::foundation::error::{DriftlineError, DriftlineResult};
use crate::foundation::math::mul_div255_u8;

/// Decode any format the `image` crate understands into a premultiplied sprite.
pub fn decode_image(bytes: &[u8]) -> DriftlineResult<Sprite> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| DriftlineError::asset(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Sprite::new(width, height, Arc::new(rgba8_premul))
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let (color, alpha) = px.split_at_mut(3);
        let a = u16::from(alpha[0]);
        if a == 255 {
            continue;
        }
        for c in color {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

/// Inverse of premultiplication, for writing PNGs.
pub fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
