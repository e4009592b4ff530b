use kurbo::Point;

use crate::fields::wave::WavePoint;
use crate::foundation::core::Rgba;
use crate::render::plan::{DrawOp, FrameSnapshot, Glow};

const LABEL_GLOW: Glow = Glow {
    color: Rgba::rgba(255, 255, 255, 0.8),
    blur: 8.0,
};

/// Calendar labels for the visible months: year and month at January, otherwise the month of
/// every third record.
pub fn axis_labels(calendar: &[WavePoint], snap: &FrameSnapshot) -> Vec<DrawOp> {
    let year_y = snap.height - 35.0;
    let month_y = snap.height - 15.0;
    let mut ops = Vec::new();
    for (i, p) in calendar.iter().enumerate() {
        if !snap.is_visible(p.x) {
            continue;
        }
        let month = format!("{:02}", p.month);
        if p.month == 1 {
            ops.push(label(p.year.to_string(), p.x, year_y, 13.0, true, 0.7));
            ops.push(label(month, p.x, month_y, 16.0, true, 1.0));
        } else if i % 3 == 0 {
            ops.push(label(month, p.x, month_y, 12.0, false, 0.5));
        }
    }
    ops
}

fn label(text: String, x: f64, y: f64, size: f32, bold: bool, alpha: f32) -> DrawOp {
    DrawOp::Text {
        text,
        at: Point::new(x, y),
        size,
        bold,
        color: Rgba::WHITE.with_alpha(alpha),
        glow: Some(LABEL_GLOW),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/scene/axis.rs"]
mod tests;
