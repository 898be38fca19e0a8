use crate::foundation::error::{SliceMorphError, SliceMorphResult};

pub use kurbo::BezPath;

/// Top edge of the seed segment.
pub const SEED_TOP: f64 = 0.485;
/// Bottom edge of the seed segment.
pub const SEED_BOTTOM: f64 = 0.515;

/// One vertical ink run inside a column, in normalized coordinates.
///
/// Both edges live in `[0, 1]` (0 is the top of the buffer) and a well-formed segment has
/// `top < bottom`. Construction through [`Segment::new`] enforces that; the plain struct literal
/// is left open so validators can be handed malformed data.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Upper edge (smaller value).
    pub top: f64,
    /// Lower edge (larger value).
    pub bottom: f64,
}

impl Segment {
    /// Small circle centered at 0.5 used wherever a column has nothing to morph from or to.
    pub const SEED: Self = Self {
        top: SEED_TOP,
        bottom: SEED_BOTTOM,
    };

    /// Build a segment, rejecting non-finite, out-of-range or inverted edges.
    pub fn new(top: f64, bottom: f64) -> SliceMorphResult<Self> {
        let seg = Self { top, bottom };
        if !seg.is_valid() {
            return Err(SliceMorphError::validation(format!(
                "segment ({top}, {bottom}) must satisfy 0 <= top < bottom <= 1"
            )));
        }
        Ok(seg)
    }

    /// Midpoint between `top` and `bottom`.
    pub fn center(self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Vertical extent `bottom - top`.
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Whether both edges are finite, inside `[0, 1]`, and `top < bottom`.
    pub fn is_valid(self) -> bool {
        self.top.is_finite()
            && self.bottom.is_finite()
            && (0.0..=1.0).contains(&self.top)
            && (0.0..=1.0).contains(&self.bottom)
            && self.top < self.bottom
    }

    /// Blend each edge linearly: `self + (other - self) * t`.
    ///
    /// `t` is used as given; callers clamp.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            top: self.top + (other.top - self.top) * t,
            bottom: self.bottom + (other.bottom - self.bottom) * t,
        }
    }
}

/// Segments of one column in top-to-bottom scan order.
pub type Column = Vec<Segment>;

/// Per-column segment lists for one rendered piece of text.
///
/// Serializes as a plain nested array: `[[{"top":..,"bottom":..}, ..], ..]`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SliceMap {
    columns: Vec<Column>,
}

impl SliceMap {
    /// Wrap already-built columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// One seed segment per column; what callers get when rasterization is unavailable.
    pub fn default_for(column_count: usize) -> Self {
        Self {
            columns: vec![vec![Segment::SEED]; column_count],
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// `true` when the map has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Segments of column `idx`, or `None` when out of range.
    pub fn column(&self, idx: usize) -> Option<&[Segment]> {
        self.columns.get(idx).map(Vec::as_slice)
    }

    /// All columns in index order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Total number of segments across all columns.
    pub fn segment_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Consume the map and return its columns.
    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Parse the nested-array JSON form.
    pub fn from_json(s: &str) -> SliceMorphResult<Self> {
        serde_json::from_str(s).map_err(|e| SliceMorphError::serde(e.to_string()))
    }

    /// Serialize to the nested-array JSON form.
    pub fn to_json(&self) -> SliceMorphResult<String> {
        serde_json::to_string(self).map_err(|e| SliceMorphError::serde(e.to_string()))
    }
}

impl From<Vec<Column>> for SliceMap {
    fn from(columns: Vec<Column>) -> Self {
        Self::new(columns)
    }
}

/// Straight (non-premultiplied) RGBA8 pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Opaque white buffer of the given size.
    pub fn white(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![255; (width as usize) * (height as usize) * 4],
        }
    }

    /// Convert into an `image` crate buffer, e.g. for saving a PNG.
    pub fn to_rgba_image(&self) -> SliceMorphResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            SliceMorphError::validation(format!(
                "pixel buffer of {} bytes does not match {}x{} RGBA8",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
