use crate::{
    extract::columns::extract_from_raster,
    foundation::core::{RasterImage, SliceMap},
    foundation::error::{SliceMorphError, SliceMorphResult},
};

/// Pixel columns rendered per slice column.
pub const PIXELS_PER_COLUMN: u32 = 4;
/// Fixed raster height in pixels.
pub const RASTER_HEIGHT: u32 = 200;

const START_FONT_SIZE: f32 = 120.0;
const FONT_SIZE_STEP: f32 = 5.0;
const MIN_FONT_SIZE: f32 = 10.0;
const MAX_FONT_SIZE: f32 = 300.0;
const MAX_GROWN_FONT_SIZE: f32 = 200.0;
// Enough to sweep the whole (MIN_FONT_SIZE, MAX_FONT_SIZE) range once.
const MAX_FIT_STEPS: usize = 64;

/// Optional sizing hints for [`GlyphRasterizer::rasterize`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RasterHint {
    /// Starting font size in pixels. When set, text is fitted to 80% of the buffer width instead
    /// of 90%.
    pub font_size: Option<f32>,
    /// CSS-style font weight (100..=900).
    pub font_weight: Option<f32>,
}

impl RasterHint {
    fn target_fraction(&self) -> f32 {
        if self.font_size.is_some() { 0.8 } else { 0.9 }
    }
}

/// Draws text into a pixel buffer for column extraction.
///
/// Implementations render black text centered on an opaque white buffer of
/// `columns * PIXELS_PER_COLUMN` by [`RASTER_HEIGHT`] pixels.
pub trait GlyphRasterizer {
    /// Render `text` for a slice map of `columns` columns.
    fn rasterize(
        &mut self,
        text: &str,
        columns: u32,
        hint: &RasterHint,
    ) -> SliceMorphResult<RasterImage>;
}

/// Rasterize `text` and extract its slice map, falling back to [`SliceMap::default_for`] when the
/// rasterizer or extraction fails.
#[tracing::instrument(skip(rasterizer, hint))]
pub fn text_to_slice_map(
    rasterizer: &mut dyn GlyphRasterizer,
    text: &str,
    columns: u32,
    hint: &RasterHint,
) -> SliceMap {
    let result = rasterizer
        .rasterize(text, columns, hint)
        .and_then(|img| extract_from_raster(&img, columns));
    match result {
        Ok(map) => map,
        Err(err) => {
            tracing::warn!(%err, "rasterization unavailable, using default slice map");
            SliceMap::default_for(columns as usize)
        }
    }
}

/// [`GlyphRasterizer`] backed by Parley text layout and the `vello_cpu` rasterizer.
pub struct TextRasterizer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for TextRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRasterizer")
            .field("family_name", &self.family_name)
            .finish()
    }
}

impl TextRasterizer {
    /// Register `font_bytes` (TTF/OTF) and prepare reusable layout contexts.
    pub fn new(font_bytes: Vec<u8>) -> SliceMorphResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SliceMorphError::raster("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SliceMorphError::raster("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    /// Read a font file from disk and build a rasterizer from it.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> SliceMorphResult<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))?;
        Self::new(bytes)
    }

    /// Family name detected in the registered font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        weight: Option<f32>,
    ) -> parley::Layout<()> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if let Some(w) = weight {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::new(w),
            ));
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Pick a font size for `text` and lay it out at that size.
    fn fit_layout(
        &mut self,
        text: &str,
        buffer_width: f32,
        hint: &RasterHint,
    ) -> (f32, parley::Layout<()>) {
        let target = buffer_width * hint.target_fraction();
        let start = hint
            .font_size
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(START_FONT_SIZE);
        let size = fit_font_size(start, target, |size| {
            layout_extent(&self.layout(text, size, hint.font_weight)).0
        });
        (size, self.layout(text, size, hint.font_weight))
    }
}

/// Step the font size by [`FONT_SIZE_STEP`] until `width_at(size)` lands in
/// `[0.8 * target, target]`.
///
/// Growth stops at [`MAX_GROWN_FONT_SIZE`]. A step that leaves `(MIN_FONT_SIZE, MAX_FONT_SIZE)`
/// is still taken and ends the search. When the direction reverses the band was skipped over, so
/// the search ends on the last size that fit within `target`.
fn fit_font_size(start: f32, target: f32, mut width_at: impl FnMut(f32) -> f32) -> f32 {
    let mut size = start.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    let mut last_step = 0.0f32;
    let mut last_fit: Option<f32> = None;

    for _ in 0..MAX_FIT_STEPS {
        let width = width_at(size);
        let step = if width > target {
            -FONT_SIZE_STEP
        } else if width < target * 0.8 && size < MAX_GROWN_FONT_SIZE {
            FONT_SIZE_STEP
        } else {
            return size;
        };

        if step * last_step < 0.0 {
            return if width <= target {
                size
            } else {
                last_fit.unwrap_or(size)
            };
        }
        if width <= target {
            last_fit = Some(size);
        }

        let next = size + step;
        if next <= MIN_FONT_SIZE || next >= MAX_FONT_SIZE {
            return next;
        }
        last_step = step;
        size = next;
    }

    last_fit.unwrap_or(size)
}

impl GlyphRasterizer for TextRasterizer {
    #[tracing::instrument(skip(self, hint))]
    fn rasterize(
        &mut self,
        text: &str,
        columns: u32,
        hint: &RasterHint,
    ) -> SliceMorphResult<RasterImage> {
        let width = columns
            .checked_mul(PIXELS_PER_COLUMN)
            .filter(|w| *w > 0)
            .and_then(|w| u16::try_from(w).ok())
            .ok_or_else(|| {
                SliceMorphError::raster(format!(
                    "no drawable surface for {columns} columns ({PIXELS_PER_COLUMN} px each)"
                ))
            })?;
        let height = RASTER_HEIGHT as u16;

        let (size, layout) = self.fit_layout(text, f32::from(width), hint);
        let (text_w, text_h) = layout_extent(&layout);
        tracing::debug!(font_size = size, text_w, text_h, "fitted text layout");

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        let dx = (f64::from(width) - f64::from(text_w)) / 2.0;
        let dy = (f64::from(height) - f64::from(text_h)) / 2.0;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((dx, dy)));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);

        // The white backdrop keeps every pixel opaque, so premultiplied equals straight here.
        Ok(RasterImage {
            width: u32::from(width),
            height: u32::from(height),
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

fn layout_extent(layout: &parley::Layout<()>) -> (f32, f32) {
    let mut w = 0.0f32;
    let mut h = 0.0f32;
    for line in layout.lines() {
        let m = line.metrics();
        w = w.max(m.advance);
        h += m.ascent + m.descent + m.leading;
    }
    (w, h)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/text.rs"]
mod tests;
