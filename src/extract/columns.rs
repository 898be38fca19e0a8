use crate::foundation::{
    core::{Column, RasterImage, Segment, SliceMap},
    error::{SliceMorphError, SliceMorphResult},
};

/// Any color channel strictly below this value marks a pixel as ink.
pub const INK_THRESHOLD: u8 = 128;

/// Scan a straight RGBA8 buffer into a [`SliceMap`] with `column_count` columns.
///
/// The buffer is split into `column_count` bands with floored integer boundaries. Within a band
/// a row is ink when any pixel has a red, green or blue channel below [`INK_THRESHOLD`]. Each
/// maximal run of ink rows becomes one segment `(start / height, end / height)`; a run that
/// reaches the last row closes at `1.0`. Columns without ink hold a single [`Segment::SEED`].
#[tracing::instrument(skip(pixels))]
pub fn extract_slice_map(
    pixels: &[u8],
    width: u32,
    height: u32,
    column_count: u32,
) -> SliceMorphResult<SliceMap> {
    if width == 0 || height == 0 {
        return Err(SliceMorphError::validation(
            "extraction buffer width/height must be > 0",
        ));
    }
    if column_count == 0 {
        return Err(SliceMorphError::validation("column_count must be > 0"));
    }
    let expected = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected {
        return Err(SliceMorphError::validation(format!(
            "pixel buffer has {} bytes, expected {expected} for {width}x{height} RGBA8",
            pixels.len()
        )));
    }

    let mut columns = Vec::<Column>::with_capacity(column_count as usize);
    let mut empty_columns = 0usize;

    for idx in 0..column_count {
        let start_x = band_edge(idx, width, column_count);
        let end_x = band_edge(idx + 1, width, column_count);
        let mut segments = scan_band(pixels, width, height, start_x, end_x);
        if segments.is_empty() {
            empty_columns += 1;
            segments.push(Segment::SEED);
        }
        columns.push(segments);
    }

    tracing::debug!(
        columns = columns.len(),
        empty_columns,
        "extracted slice map"
    );
    Ok(SliceMap::new(columns))
}

/// Same as [`extract_slice_map`] for a [`RasterImage`].
pub fn extract_from_raster(image: &RasterImage, column_count: u32) -> SliceMorphResult<SliceMap> {
    extract_slice_map(&image.data, image.width, image.height, column_count)
}

fn band_edge(idx: u32, width: u32, column_count: u32) -> u32 {
    (u64::from(idx) * u64::from(width) / u64::from(column_count)) as u32
}

fn scan_band(pixels: &[u8], width: u32, height: u32, start_x: u32, end_x: u32) -> Column {
    let mut segments = Column::new();
    let mut run_start: Option<u32> = None;
    let h = f64::from(height);

    for y in 0..height {
        let ink = row_has_ink(pixels, width, y, start_x, end_x);
        match (ink, run_start) {
            (true, None) => run_start = Some(y),
            (false, Some(start)) => {
                segments.push(Segment {
                    top: f64::from(start) / h,
                    bottom: f64::from(y) / h,
                });
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        segments.push(Segment {
            top: f64::from(start) / h,
            bottom: 1.0,
        });
    }

    segments
}

fn row_has_ink(pixels: &[u8], width: u32, y: u32, start_x: u32, end_x: u32) -> bool {
    let row = (y as usize) * (width as usize) * 4;
    let band = &pixels[row + (start_x as usize) * 4..row + (end_x as usize) * 4];
    band.chunks_exact(4)
        .any(|px| px[..3].iter().any(|&c| c < INK_THRESHOLD))
}

#[cfg(test)]
#[path = "../../tests/unit/extract/columns.rs"]
mod tests;
