use anyhow::Context;

use crate::{
    extract::columns::extract_from_raster,
    foundation::core::{RasterImage, SliceMap},
    foundation::error::SliceMorphResult,
};

/// Decode encoded image bytes (PNG, JPEG, ...) into straight RGBA8 flattened onto white.
///
/// Flattening keeps transparent regions from reading as ink, matching a glyph drawn on an opaque
/// white canvas.
pub fn decode_raster(bytes: &[u8]) -> SliceMorphResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(flatten_on_white(&dyn_img.to_rgba8()))
}

/// Decode encoded image bytes and extract a slice map with `column_count` columns.
pub fn decode_slice_map(bytes: &[u8], column_count: u32) -> SliceMorphResult<SliceMap> {
    let raster = decode_raster(bytes)?;
    extract_from_raster(&raster, column_count)
}

/// Extract a slice map straight from an `image` crate buffer.
pub fn extract_slice_map_from_image(
    img: &image::RgbaImage,
    column_count: u32,
) -> SliceMorphResult<SliceMap> {
    extract_from_raster(&flatten_on_white(img), column_count)
}

fn flatten_on_white(img: &image::RgbaImage) -> RasterImage {
    let (width, height) = img.dimensions();
    let mut data = img.as_raw().clone();
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 255 * (255 - a) + 127) / 255) as u8;
        }
        px[3] = 255;
    }
    RasterImage {
        width,
        height,
        data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/extract/decode.rs"]
mod tests;
