use crate::{
    foundation::core::{Column, Segment, SliceMap},
    morph::plan::MorphPairs,
};

/// Clamp `progress` into `[0, 1]`; NaN maps to `0`.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Blend every matched pair at `progress` and return the intermediate slice map.
///
/// Pure: the same inputs always produce the same map. `progress == 0` reproduces the current
/// segments exactly and `progress == 1` the target segments. A pair with unequal sides is padded
/// with [`Segment::SEED`].
pub fn interpolate(pairs: &MorphPairs, progress: f64) -> SliceMap {
    let t = clamp_progress(progress);
    let columns = pairs
        .iter()
        .map(|pair| blend_column(&pair.current, &pair.target, t))
        .collect();
    SliceMap::new(columns)
}

/// Blend two slice maps index by index without running the matcher.
///
/// Missing columns and missing segments on the shorter side are padded with
/// [`Segment::SEED`] so every segment has a partner.
pub fn interpolate_maps(start: &SliceMap, end: &SliceMap, progress: f64) -> SliceMap {
    let t = clamp_progress(progress);
    let column_count = start.len().max(end.len());

    let columns = (0..column_count)
        .map(|idx| {
            let a = start.column(idx).unwrap_or(&[]);
            let b = end.column(idx).unwrap_or(&[]);
            blend_column(a, b, t)
        })
        .collect();
    SliceMap::new(columns)
}

fn pad_to_same_len(a: &[Segment], b: &[Segment]) -> (Column, Column) {
    let len = a.len().max(b.len());
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.resize(len, Segment::SEED);
    b.resize(len, Segment::SEED);
    (a, b)
}

fn blend_column(current: &[Segment], target: &[Segment], t: f64) -> Column {
    let (current, target) = pad_to_same_len(current, target);
    // `lerp` at t = 1 is not bit-exact, so the endpoints are returned as-is.
    if t == 0.0 {
        return current;
    }
    if t == 1.0 {
        return target;
    }
    current
        .iter()
        .zip(&target)
        .map(|(&a, &b)| a.lerp(b, t))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interpolate.rs"]
mod tests;
