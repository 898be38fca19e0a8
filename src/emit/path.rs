use std::fmt::Write as _;

use kurbo::{Ellipse, Point, RoundedRect, Shape, Vec2};

use crate::foundation::core::{BezPath, Segment, SliceMap};

/// Flattening tolerance used when converting shapes to Bezier paths, in canvas units.
const PATH_TOLERANCE: f64 = 0.1;

/// Horizontal inset as a fraction of the column width.
const INSET_FRACTION: f64 = 0.05;

/// Presentation attributes for [`slice_map_to_svg_with`].
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    /// `fill` attribute of every path.
    pub fill: String,
    /// Optional background rectangle color; `None` leaves the canvas transparent.
    pub background: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            fill: "black".to_string(),
            background: None,
        }
    }
}

/// Outline for one segment of column `column` on a `canvas_width × canvas_height` canvas.
///
/// The column box is inset horizontally by 5% of the column width (at least 1 unit). A segment
/// no taller than the inset width becomes an ellipse filling its box; a taller one becomes a
/// capsule with semicircular caps. Returns `None` when the box has no area.
pub fn segment_outline(
    column: usize,
    column_count: usize,
    segment: Segment,
    canvas_width: f64,
    canvas_height: f64,
) -> Option<BezPath> {
    if column_count == 0 {
        return None;
    }
    let column_width = canvas_width / column_count as f64;
    let inset = (column_width * INSET_FRACTION).max(1.0);

    let x = column as f64 * column_width + inset;
    let w = column_width - 2.0 * inset;
    let y = segment.top * canvas_height;
    let h = segment.height() * canvas_height;
    if !(w > 0.0 && h > 0.0) {
        return None;
    }

    let path = if h <= w {
        Ellipse::new(
            Point::new(x + w / 2.0, y + h / 2.0),
            Vec2::new(w / 2.0, h / 2.0),
            0.0,
        )
        .to_path(PATH_TOLERANCE)
    } else {
        RoundedRect::new(x, y, x + w, y + h, w / 2.0).to_path(PATH_TOLERANCE)
    };
    Some(path)
}

/// SVG path data (`d` attribute values), one per drawable segment, in column order.
pub fn slice_map_to_paths(map: &SliceMap, canvas_width: f64, canvas_height: f64) -> Vec<String> {
    let column_count = map.len();
    map.columns()
        .iter()
        .enumerate()
        .flat_map(|(idx, col)| {
            col.iter().filter_map(move |&seg| {
                segment_outline(idx, column_count, seg, canvas_width, canvas_height)
            })
        })
        .map(|path| path.to_svg())
        .collect()
}

/// Standalone SVG document with black paths on a transparent canvas.
pub fn slice_map_to_svg(map: &SliceMap, canvas_width: f64, canvas_height: f64) -> String {
    slice_map_to_svg_with(map, canvas_width, canvas_height, &SvgStyle::default())
}

/// Standalone SVG document with `width`/`height`/`viewBox` set to the canvas size.
pub fn slice_map_to_svg_with(
    map: &SliceMap,
    canvas_width: f64,
    canvas_height: f64,
    style: &SvgStyle,
) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas_width}" height="{canvas_height}" viewBox="0 0 {canvas_width} {canvas_height}">"#
    );
    if let Some(bg) = &style.background {
        let _ = write!(
            out,
            r#"<rect width="{canvas_width}" height="{canvas_height}" fill="{bg}"/>"#
        );
    }
    for d in slice_map_to_paths(map, canvas_width, canvas_height) {
        let _ = write!(out, r#"<path d="{d}" fill="{}"/>"#, style.fill);
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/emit/path.rs"]
mod tests;
