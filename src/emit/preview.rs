use anyhow::Context;

use crate::foundation::{
    core::RasterImage,
    error::{SliceMorphError, SliceMorphResult},
};

/// Largest preview edge accepted, in pixels.
const MAX_PREVIEW_DIM: u32 = 16_384;

/// Rasterize an SVG document onto an opaque white `width × height` buffer.
///
/// The document is scaled to fill the buffer. Output is straight RGBA8, so it can be fed back into
/// [`crate::extract_from_raster`].
pub fn render_svg_preview(svg: &str, width: u32, height: u32) -> SliceMorphResult<RasterImage> {
    if width == 0 || height == 0 || width > MAX_PREVIEW_DIM || height > MAX_PREVIEW_DIM {
        return Err(SliceMorphError::validation(format!(
            "preview size {width}x{height} must be within 1..={MAX_PREVIEW_DIM}"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SliceMorphError::raster("failed to allocate preview pixmap"))?;
    pixmap.fill(resvg::tiny_skia::Color::WHITE);

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(RasterImage {
        width,
        height,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/emit/preview.rs"]
mod tests;
