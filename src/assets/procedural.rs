//! Generated stand-ins used when no sprite file is configured.

use std::sync::Arc;

use kurbo::{Circle, Ellipse, Point, Rect, RoundedRect, Shape};

use crate::assets::sprite::Sprite;
use crate::foundation::core::Rgba;
use crate::foundation::error::{DriftlineError, DriftlineResult};
use crate::render::cpu::bezpath_to_cpu;

const TOLERANCE: f64 = 0.1;

/// Soft white cloud, 160x100. Tinted per point by the sentiment layer.
pub fn cloud_sprite() -> DriftlineResult<Sprite> {
    let white = Rgba::WHITE;
    let shapes: Vec<(kurbo::BezPath, Rgba)> = vec![
        (Circle::new((50.0, 60.0), 30.0).to_path(TOLERANCE), white),
        (Circle::new((85.0, 45.0), 38.0).to_path(TOLERANCE), white),
        (Circle::new((120.0, 58.0), 28.0).to_path(TOLERANCE), white),
        (
            RoundedRect::new(22.0, 55.0, 140.0, 90.0, 17.0).to_path(TOLERANCE),
            white,
        ),
    ];
    paint_shapes(160, 100, &shapes)
}

/// Side view of a small submarine facing right, 200x90.
pub fn indicator_sprite() -> DriftlineResult<Sprite> {
    let hull = Rgba::rgb(0xf2, 0xc1, 0x4e);
    let trim = Rgba::rgb(0xc9, 0x8a, 0x1c);
    let glass = Rgba::rgb(0x1b, 0x3b, 0x5a);
    let mut shapes = vec![
        (Rect::new(2.0, 44.0, 16.0, 68.0).to_path(TOLERANCE), trim),
        (
            Ellipse::new(Point::new(100.0, 56.0), (86.0, 22.0), 0.0).to_path(TOLERANCE),
            hull,
        ),
        (
            RoundedRect::new(80.0, 18.0, 122.0, 42.0, 6.0).to_path(TOLERANCE),
            hull,
        ),
        (Rect::new(106.0, 4.0, 111.0, 20.0).to_path(TOLERANCE), trim),
        (Rect::new(106.0, 4.0, 122.0, 9.0).to_path(TOLERANCE), trim),
    ];
    for cx in [62.0, 97.0, 132.0] {
        shapes.push((Circle::new((cx, 56.0), 7.5).to_path(TOLERANCE), glass));
    }
    paint_shapes(200, 90, &shapes)
}

fn paint_shapes(
    width: u16,
    height: u16,
    shapes: &[(kurbo::BezPath, Rgba)],
) -> DriftlineResult<Sprite> {
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    for (path, color) in shapes {
        let a = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, a));
        ctx.fill_path(&bezpath_to_cpu(path));
    }
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);
    let bytes = pixmap.data_as_u8_slice().to_vec();
    if bytes.len() != usize::from(width) * usize::from(height) * 4 {
        return Err(DriftlineError::render("generated sprite has unexpected size"));
    }
    Sprite::new(u32::from(width), u32::from(height), Arc::new(bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/procedural.rs"]
mod tests;
