use std::collections::HashMap;
use std::path::Path;

use parley::fontique::{Collection, CollectionOptions, GenericFamily, SourceCache};
use vello_cpu::peniko::FontData;

use crate::foundation::error::{DriftlineError, DriftlineResult};

/// Brush carried through parley layouts. Labels are colorized after rasterization, so only
/// coverage matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Glyphs that share one font face, as chosen by the shaper.
#[derive(Clone, Debug)]
pub struct LabelRun {
    pub font: FontData,
    pub glyphs: Vec<PlacedGlyph>,
}

/// A shaped single-line label with glyphs relative to its left edge and baseline.
#[derive(Clone, Debug)]
pub struct ShapedLabel {
    pub runs: Vec<LabelRun>,
    pub font_size: f32,
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl ShapedLabel {
    pub fn glyph_count(&self) -> usize {
        self.runs.iter().map(|r| r.glyphs.len()).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LabelKey {
    text: String,
    size_bits: u32,
    bold: bool,
}

/// Shapes axis labels with one font family, caching by text and style.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    cache: HashMap<LabelKey, ShapedLabel>,
}

impl std::fmt::Debug for TextShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextShaper")
            .field("family_name", &self.family_name)
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl TextShaper {
    pub fn from_path(path: &Path) -> DriftlineResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            DriftlineError::asset(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_font_bytes(bytes)
    }

    /// Shape with the font in `bytes` only; host fonts are not consulted.
    pub fn from_font_bytes(bytes: Vec<u8>) -> DriftlineResult<Self> {
        let mut font_ctx = parley::FontContext {
            collection: Collection::new(CollectionOptions {
                shared: false,
                system_fonts: false,
            }),
            source_cache: SourceCache::default(),
        };
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| DriftlineError::asset("no font families found in font data"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| DriftlineError::asset("registered font family has no name"))?
            .to_string();
        Ok(Self::with_family(font_ctx, family_name))
    }

    /// Resolve the host's generic sans-serif family.
    pub fn system_sans_serif() -> DriftlineResult<Self> {
        let mut font_ctx = parley::FontContext::new();
        let family_ids: Vec<_> = font_ctx
            .collection
            .generic_families(GenericFamily::SansSerif)
            .collect();
        let family_name = family_ids
            .into_iter()
            .find_map(|id| {
                let family = font_ctx.collection.family(id)?;
                let font = family.default_font()?;
                font.load(Some(&mut font_ctx.source_cache))?;
                Some(family.name().to_owned())
            })
            .ok_or_else(|| DriftlineError::asset("no system sans-serif font available"))?;
        Ok(Self::with_family(font_ctx, family_name))
    }

    fn with_family(font_ctx: parley::FontContext, family_name: String) -> Self {
        Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            cache: HashMap::new(),
        }
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `text` on one line, reusing a cached result when available.
    pub fn shape(&mut self, text: &str, size_px: f32, bold: bool) -> DriftlineResult<&ShapedLabel> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(DriftlineError::validation(
                "text size must be finite and > 0",
            ));
        }
        let key = LabelKey {
            text: text.to_owned(),
            size_bits: size_px.to_bits(),
            bold,
        };
        if !self.cache.contains_key(&key) {
            let shaped = self.layout(text, size_px, bold);
            self.cache.insert(key.clone(), shaped);
        }
        self.cache
            .get(&key)
            .ok_or_else(|| DriftlineError::render("label cache lost an entry"))
    }

    fn layout(&mut self, text: &str, size_px: f32, bold: bool) -> ShapedLabel {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8 {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let mut runs = Vec::new();
        let (mut ascent, mut descent) = (0.0f32, 0.0f32);
        if let Some(line) = layout.lines().next() {
            let metrics = line.metrics();
            let baseline = metrics.baseline;
            ascent = metrics.ascent;
            descent = metrics.descent;
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs: Vec<PlacedGlyph> = run
                    .positioned_glyphs()
                    .map(|g| PlacedGlyph {
                        id: g.id.into(),
                        x: g.x,
                        y: g.y - baseline,
                    })
                    .collect();
                if glyphs.is_empty() {
                    continue;
                }
                runs.push(LabelRun {
                    font: run.run().font().clone(),
                    glyphs,
                });
            }
        }

        ShapedLabel {
            runs,
            font_size: size_px,
            width: layout.width(),
            ascent,
            descent,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
