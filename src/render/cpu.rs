use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use kurbo::{Affine, Rect, Shape, Stroke, StrokeOpts};

use crate::assets::sprite::{Sprite, SpriteKind, SpriteSheet};
use crate::foundation::core::{Canvas, Rgba};
use crate::foundation::error::{DriftlineError, DriftlineResult};
use crate::layers::LayerKind;

use super::backend::{FrameRGBA, LayerBackend};
use super::blur::{BlurSpec, blur_rgba8_premul};
use super::composite::{blend_in_place, tint_inside};
use super::paint::Paint;
use super::plan::{BlendMode, DrawOp, Glow, LayerScene};
use super::text::TextShaper;

const STROKE_TOLERANCE: f64 = 0.1;
const FAUX_BOLD_OFFSET: f64 = 0.5;

enum LabelFont {
    SystemPending,
    Ready(Box<TextShaper>),
    Unavailable,
}

#[derive(Clone, Debug, Default)]
pub struct CpuSettings {
    /// Background under the stacked layers; transparent when unset.
    pub background: Option<Rgba>,
}

/// Software backend: one premultiplied RGBA8 surface per layer.
///
/// Each op is rasterized by `vello_cpu` into a buffer covering only its device bounds, colorized
/// from its [`Paint`] in software and blended onto the layer surface.
pub struct CpuBackend {
    settings: CpuSettings,
    width: u16,
    height: u16,
    surfaces: HashMap<LayerKind, Vec<u8>>,
    text: LabelFont,
    sprite_cache: HashMap<SpriteKind, (Arc<Vec<u8>>, vello_cpu::Image)>,
}

impl CpuBackend {
    pub fn new(settings: CpuSettings) -> Self {
        Self {
            settings,
            width: 0,
            height: 0,
            surfaces: HashMap::new(),
            text: LabelFont::SystemPending,
            sprite_cache: HashMap::new(),
        }
    }

    /// Shape labels with `shaper` instead of the host's sans-serif family.
    pub fn with_text(mut self, shaper: TextShaper) -> Self {
        self.text = LabelFont::Ready(Box::new(shaper));
        self
    }

    pub fn with_font_file(self, path: &Path) -> DriftlineResult<Self> {
        Ok(self.with_text(TextShaper::from_path(path)?))
    }

    /// Skip every text op.
    pub fn without_text(mut self) -> Self {
        self.text = LabelFont::Unavailable;
        self
    }

    /// False once labels are disabled or no font could be resolved.
    pub fn has_text(&self) -> bool {
        !matches!(self.text, LabelFont::Unavailable)
    }

    /// The label shaper, resolving the system sans-serif family on first use.
    fn shaper(&mut self) -> Option<&mut TextShaper> {
        if matches!(self.text, LabelFont::SystemPending) {
            self.text = match TextShaper::system_sans_serif() {
                Ok(shaper) => {
                    tracing::debug!(family = shaper.family_name(), "using system font for labels");
                    LabelFont::Ready(Box::new(shaper))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "no font for axis labels; labels skipped");
                    LabelFont::Unavailable
                }
            };
        }
        match &mut self.text {
            LabelFont::Ready(shaper) => Some(shaper.as_mut()),
            _ => None,
        }
    }

    /// Current contents of one layer surface.
    pub fn layer_pixels(&self, layer: LayerKind) -> Option<&[u8]> {
        self.surfaces.get(&layer).map(Vec::as_slice)
    }

    fn byte_len(&self) -> usize {
        usize::from(self.width) * usize::from(self.height) * 4
    }

    fn draw_op(
        &mut self,
        dst: &mut [u8],
        origin: Affine,
        op: &DrawOp,
        sprites: &SpriteSheet,
    ) -> DriftlineResult<()> {
        match op {
            DrawOp::Fill {
                path,
                transform,
                paint,
                blend,
                opacity,
            } => {
                let to_device = origin * *transform;
                let bounds = to_device.transform_rect_bbox(path.bounding_box());
                let Some(region) = self.region(bounds, 0) else {
                    return Ok(());
                };
                let cpu_path = bezpath_to_cpu(path);
                let mut buf = rasterize(region, to_device, |ctx| ctx.fill_path(&cpu_path));
                colorize(&mut buf, region, to_device, paint);
                composite_region(dst, self.width, region, &buf, *opacity, *blend)
            }
            DrawOp::Stroke {
                path,
                transform,
                width,
                paint,
                blend,
                opacity,
                glow,
            } => {
                let outline = kurbo::stroke(
                    path.iter(),
                    &Stroke::new(*width),
                    &StrokeOpts::default(),
                    STROKE_TOLERANCE,
                );
                let to_device = origin * *transform;
                let blur = glow.and_then(|g| BlurSpec::from_shadow_blur(g.blur));
                let pad = blur.map_or(0, |b| b.radius);
                let Some(region) =
                    self.region(to_device.transform_rect_bbox(outline.bounding_box()), pad)
                else {
                    return Ok(());
                };
                let cpu_path = bezpath_to_cpu(&outline);
                let mut buf = rasterize(region, to_device, |ctx| ctx.fill_path(&cpu_path));
                if let (Some(glow), Some(blur)) = (glow, blur) {
                    draw_glow(dst, self.width, region, &buf, *glow, blur, *blend, *opacity)?;
                }
                colorize(&mut buf, region, to_device, paint);
                composite_region(dst, self.width, region, &buf, *opacity, *blend)
            }
            DrawOp::Sprite {
                sprite: kind,
                dest,
                transform,
                opacity,
                tint,
            } => {
                let Some(sprite) = sprites.get(*kind) else {
                    tracing::debug!(sprite = ?kind, "sprite not decoded; skipped");
                    return Ok(());
                };
                let to_device = origin * *transform;
                let Some(region) = self.region(to_device.transform_rect_bbox(*dest), 0) else {
                    return Ok(());
                };
                let image = self.sprite_image(*kind, sprite)?;
                let (sw, sh) = (f64::from(sprite.width()), f64::from(sprite.height()));
                let place = to_device
                    * Affine::translate(dest.origin().to_vec2())
                    * Affine::scale_non_uniform(dest.width() / sw, dest.height() / sh);
                let mut buf = rasterize(region, place, |ctx| {
                    ctx.set_paint(image);
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, sw, sh));
                });
                if let Some(color) = tint {
                    tint_inside(&mut buf, *color);
                }
                composite_region(dst, self.width, region, &buf, *opacity, BlendMode::Normal)
            }
            DrawOp::Text {
                text,
                at,
                size,
                bold,
                color,
                glow,
            } => {
                let Some(shaper) = self.shaper() else {
                    tracing::trace!(text = %text, "label skipped");
                    return Ok(());
                };
                let label = shaper.shape(text, *size, *bold)?.clone();

                let anchor = origin * *at;
                let left = anchor.x - f64::from(label.width) / 2.0;
                let bounds = Rect::new(
                    left,
                    anchor.y - f64::from(label.ascent),
                    left + f64::from(label.width) + FAUX_BOLD_OFFSET,
                    anchor.y + f64::from(label.descent),
                );
                let blur = glow.and_then(|g| BlurSpec::from_shadow_blur(g.blur));
                let Some(region) = self.region(bounds, blur.map_or(0, |b| b.radius)) else {
                    return Ok(());
                };

                let passes: &[f64] = if *bold {
                    &[0.0, FAUX_BOLD_OFFSET]
                } else {
                    &[0.0]
                };
                let mut buf = rasterize(region, Affine::IDENTITY, |ctx| {
                    for &dx in passes {
                        ctx.set_transform(affine_to_cpu(Affine::translate((
                            left + dx - f64::from(region.x0),
                            anchor.y - f64::from(region.y0),
                        ))));
                        for run in &label.runs {
                            let glyphs = run.glyphs.iter().map(|g| vello_cpu::Glyph {
                                id: g.id,
                                x: g.x,
                                y: g.y,
                            });
                            ctx.glyph_run(&run.font)
                                .font_size(label.font_size)
                                .fill_glyphs(glyphs);
                        }
                    }
                });
                if let (Some(glow), Some(blur)) = (glow, blur) {
                    draw_glow(
                        dst,
                        self.width,
                        region,
                        &buf,
                        *glow,
                        blur,
                        BlendMode::Normal,
                        1.0,
                    )?;
                }
                tint_inside(&mut buf, *color);
                composite_region(dst, self.width, region, &buf, 1.0, BlendMode::Normal)
            }
        }
    }

    /// Integer device region covering `bounds` grown by `pad`, clipped to the surface.
    fn region(&self, bounds: Rect, pad: u32) -> Option<Region> {
        if !bounds.is_finite() {
            return None;
        }
        let grow = f64::from(pad) + 1.0;
        let x0 = (bounds.x0 - grow).floor().max(0.0);
        let y0 = (bounds.y0 - grow).floor().max(0.0);
        let x1 = (bounds.x1 + grow).ceil().min(f64::from(self.width));
        let y1 = (bounds.y1 + grow).ceil().min(f64::from(self.height));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Region {
            x0: x0 as u32,
            y0: y0 as u32,
            w: (x1 - x0) as u16,
            h: (y1 - y0) as u16,
        })
    }

    fn sprite_image(
        &mut self,
        kind: SpriteKind,
        sprite: &Sprite,
    ) -> DriftlineResult<vello_cpu::Image> {
        if let Some((pixels, image)) = self.sprite_cache.get(&kind)
            && Arc::ptr_eq(pixels, sprite.shared_pixels())
        {
            return Ok(image.clone());
        }
        let pixmap = premul_bytes_to_pixmap(sprite.pixels(), sprite.width(), sprite.height())?;
        let image = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.sprite_cache
            .insert(kind, (Arc::clone(sprite.shared_pixels()), image.clone()));
        Ok(image)
    }
}

impl LayerBackend for CpuBackend {
    fn begin_frame(&mut self, canvas: Canvas) -> DriftlineResult<()> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| DriftlineError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| DriftlineError::render("surface height exceeds u16"))?;
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.surfaces.clear();
        }
        Ok(())
    }

    fn clear_layer(&mut self, layer: LayerKind) -> DriftlineResult<()> {
        let len = self.byte_len();
        let surface = self.surfaces.entry(layer).or_default();
        surface.clear();
        surface.resize(len, 0);
        Ok(())
    }

    fn render_layer(&mut self, scene: &LayerScene, sprites: &SpriteSheet) -> DriftlineResult<()> {
        let len = self.byte_len();
        let mut surface = self
            .surfaces
            .remove(&scene.layer)
            .unwrap_or_else(|| vec![0; len]);
        let result = scene
            .ops
            .iter()
            .try_for_each(|op| self.draw_op(&mut surface, scene.origin, op, sprites));
        self.surfaces.insert(scene.layer, surface);
        result
    }

    fn compose(&mut self) -> DriftlineResult<FrameRGBA> {
        let mut data = vec![0u8; self.byte_len()];
        if let Some(bg) = self.settings.background {
            let px = bg.to_premul().to_array();
            for d in data.chunks_exact_mut(4) {
                d.copy_from_slice(&px);
            }
        }
        for layer in LayerKind::STACK {
            if let Some(surface) = self.surfaces.get(&layer) {
                blend_in_place(&mut data, surface, 1.0, BlendMode::Normal)?;
            }
        }
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Region {
    x0: u32,
    y0: u32,
    w: u16,
    h: u16,
}

/// Rasterize into a region-sized buffer. The default paint is opaque white, so path fills yield
/// pure coverage.
fn rasterize(
    region: Region,
    transform: Affine,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) -> Vec<u8> {
    let mut ctx = vello_cpu::RenderContext::new(region.w, region.h);
    ctx.set_transform(affine_to_cpu(
        Affine::translate((-f64::from(region.x0), -f64::from(region.y0))) * transform,
    ));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    draw(&mut ctx);
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(region.w, region.h);
    ctx.render_to_pixmap(&mut pixmap);
    pixmap.data_as_u8_slice().to_vec()
}

/// Replace coverage with the paint's color at each pixel center, in op-local space.
fn colorize(buf: &mut [u8], region: Region, to_device: Affine, paint: &Paint) {
    if let Paint::Solid(color) = paint {
        tint_inside(buf, *color);
        return;
    }
    if to_device.determinant().abs() < 1e-12 {
        buf.fill(0);
        return;
    }
    let to_local = to_device.inverse();
    let w = usize::from(region.w);
    for (i, px) in buf.chunks_exact_mut(4).enumerate() {
        let coverage = u16::from(px[3]);
        if coverage == 0 {
            continue;
        }
        let device = kurbo::Point::new(
            f64::from(region.x0) + (i % w) as f64 + 0.5,
            f64::from(region.y0) + (i / w) as f64 + 0.5,
        );
        let c = paint.color_at(to_local * device).to_premul().to_array();
        for ch in 0..4 {
            px[ch] = crate::foundation::math::mul_div255_u8(u16::from(c[ch]), coverage);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_glow(
    dst: &mut [u8],
    dst_width: u16,
    region: Region,
    coverage: &[u8],
    glow: Glow,
    blur: BlurSpec,
    blend: BlendMode,
    opacity: f32,
) -> DriftlineResult<()> {
    let mut halo = coverage.to_vec();
    tint_inside(&mut halo, glow.color);
    let halo = blur_rgba8_premul(
        &halo,
        u32::from(region.w),
        u32::from(region.h),
        blur.radius,
        blur.sigma,
    )?;
    composite_region(dst, dst_width, region, &halo, opacity, blend)
}

/// Blend a region-sized buffer onto the matching rows of a surface.
fn composite_region(
    dst: &mut [u8],
    dst_width: u16,
    region: Region,
    src: &[u8],
    opacity: f32,
    blend: BlendMode,
) -> DriftlineResult<()> {
    let row_bytes = usize::from(region.w) * 4;
    let stride = usize::from(dst_width) * 4;
    if src.len() != row_bytes * usize::from(region.h) {
        return Err(DriftlineError::render("op buffer does not match its region"));
    }
    for (y, src_row) in src.chunks_exact(row_bytes).enumerate() {
        let start = (region.y0 as usize + y) * stride + region.x0 as usize * 4;
        let dst_row = dst
            .get_mut(start..start + row_bytes)
            .ok_or_else(|| DriftlineError::render("op region outside its surface"))?;
        blend_in_place(dst_row, src_row, opacity, blend)?;
    }
    Ok(())
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

pub(crate) fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> DriftlineResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| DriftlineError::render("sprite width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| DriftlineError::render("sprite height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(DriftlineError::render("sprite byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels: Vec<vello_cpu::peniko::color::PremulRgba8> = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
