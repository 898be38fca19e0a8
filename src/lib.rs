//! Slicemorph morphs text between glyph shapes by slicing each glyph raster into vertical columns.
//!
//! Each column of a rendered string is reduced to its vertical ink runs ("segments"), normalized
//! to `[0, 1]`. Two such slice maps are matched column by column, blended over a progress value
//! and drawn as one ellipse or capsule per segment.
//!
//! # Pipeline overview
//!
//! 1. **Rasterize**: `text -> RasterImage` through a [`GlyphRasterizer`] (see [`TextRasterizer`])
//! 2. **Extract**: `RasterImage -> SliceMap` ([`extract_slice_map`])
//! 3. **Match**: `(SliceMap, SliceMap) -> MorphPairs` ([`match_slice_maps`])
//! 4. **Interpolate**: `MorphPairs + progress -> SliceMap` ([`interpolate`])
//! 5. **Emit**: `SliceMap -> SVG` ([`slice_map_to_svg`])
//!
//! [`validate_morphing_segments`] samples a transition and reports segments that collapse into a
//! sliver at the vertical center, leave `[0, 1]` or invert.
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: matching and interpolation are pure; parallel matching is order-stable.
//! - **Never inverted**: every produced segment comes from an input or the seed segment, so
//!   `top < bottom` holds throughout a transition.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod config;
mod emit;
mod extract;
mod foundation;
mod morph;
mod raster;
mod validate;

pub use animation::ease::{Ease, parse_ease};
pub use config::model::{AnimationConfig, MorphConfig};
pub use emit::path::{
    SvgStyle, segment_outline, slice_map_to_paths, slice_map_to_svg, slice_map_to_svg_with,
};
pub use emit::preview::render_svg_preview;
pub use extract::columns::{INK_THRESHOLD, extract_from_raster, extract_slice_map};
pub use extract::decode::{decode_raster, decode_slice_map, extract_slice_map_from_image};
pub use foundation::core::{
    BezPath, Column, RasterImage, SEED_BOTTOM, SEED_TOP, Segment, SliceMap,
};
pub use foundation::error::{SliceMorphError, SliceMorphResult};
pub use morph::interpolate::{clamp_progress, interpolate, interpolate_maps};
pub use morph::matcher::{match_column, match_segments, match_slice_maps, pair_score};
pub use morph::plan::{MatchPair, MorphPairs};
pub use morph::weights::{MatchWeights, MatcherConfig};
pub use raster::text::{
    GlyphRasterizer, PIXELS_PER_COLUMN, RASTER_HEIGHT, RasterHint, TextRasterizer,
    text_to_slice_map,
};
pub use validate::checks::{
    COLLAPSE_CENTER_EPS, COLLAPSE_MAX_HEIGHT, MorphIssue, MorphIssueKind, MorphReport,
    SEED_CENTER_EPS, SEED_HEIGHT_EPS, find_center_collapse, is_center_collapse, is_seed_like,
    validate_morphing_segments, validate_slice_map, validate_slice_map_json,
};
