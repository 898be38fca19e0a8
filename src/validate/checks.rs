use crate::{
    foundation::core::{Segment, SliceMap},
    morph::interpolate::clamp_progress,
    morph::plan::MorphPairs,
};

/// A blended segment whose center is closer than this to 0.5 may be a collapse artifact.
pub const COLLAPSE_CENTER_EPS: f64 = 0.01;
/// Near-center blended segments shorter than this count as collapsed unless seed-like.
pub const COLLAPSE_MAX_HEIGHT: f64 = 0.02;
/// Center tolerance for recognizing the seed segment.
pub const SEED_CENTER_EPS: f64 = 0.001;
/// Height tolerance (around 0.03) for recognizing the seed segment.
pub const SEED_HEIGHT_EPS: f64 = 0.005;

/// Whether every segment of `map` has finite edges in `[0, 1]` with `top < bottom`.
pub fn validate_slice_map(map: &SliceMap) -> bool {
    map.columns().iter().flatten().all(|s| s.is_valid())
}

/// Structural and range check on untyped slice map data, e.g. freshly parsed JSON.
///
/// Accepts an array of arrays of objects whose `top` and `bottom` are numbers satisfying the same
/// constraints as [`validate_slice_map`]. Anything else is invalid; this never errors.
pub fn validate_slice_map_json(value: &serde_json::Value) -> bool {
    let Some(columns) = value.as_array() else {
        return false;
    };
    columns.iter().all(|col| {
        let Some(segments) = col.as_array() else {
            return false;
        };
        segments.iter().all(|seg| {
            let (Some(top), Some(bottom)) = (
                seg.get("top").and_then(serde_json::Value::as_f64),
                seg.get("bottom").and_then(serde_json::Value::as_f64),
            ) else {
                return false;
            };
            Segment { top, bottom }.is_valid()
        })
    })
}

/// Whether `seg` looks like the intentional seed circle rather than an artifact.
pub fn is_seed_like(seg: Segment) -> bool {
    (seg.center() - 0.5).abs() < SEED_CENTER_EPS
        && (seg.height() - Segment::SEED.height()).abs() < SEED_HEIGHT_EPS
}

/// Whether `seg` has collapsed into a sliver at the vertical center.
pub fn is_center_collapse(seg: Segment) -> bool {
    (seg.center() - 0.5).abs() < COLLAPSE_CENTER_EPS
        && seg.height() < COLLAPSE_MAX_HEIGHT
        && !is_seed_like(seg)
}

/// Indices of segments in `segments` that are unintended center collapses.
pub fn find_center_collapse(segments: &[Segment]) -> Vec<usize> {
    segments
        .iter()
        .enumerate()
        .filter(|(_, s)| is_center_collapse(**s))
        .map(|(i, _)| i)
        .collect()
}

/// What went wrong with one blended segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphIssueKind {
    /// Shrunk into a sliver at 0.5 without being the seed.
    CenterCollapse,
    /// An edge left `[0, 1]` (or is not finite).
    OutOfRange,
    /// `top >= bottom`.
    Inverted,
}

/// One finding from [`validate_morphing_segments`].
#[derive(Clone, Debug, PartialEq)]
pub struct MorphIssue {
    /// Column index.
    pub slice_index: usize,
    /// Index within the column's matched segments.
    pub segment_index: usize,
    /// Kind of problem.
    pub kind: MorphIssueKind,
    /// Blended segment at the sampled progress.
    pub blended: Segment,
    /// Start segment of the pair.
    pub current: Segment,
    /// End segment of the pair.
    pub target: Segment,
}

/// Result of sampling a transition at one progress value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MorphReport {
    /// Progress the pairs were sampled at, after clamping.
    pub progress: f64,
    /// Every problem found, in column then segment order.
    pub issues: Vec<MorphIssue>,
}

impl MorphReport {
    /// `true` when no issue was found.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Blend every pair at `progress` and report collapse, range and inversion problems.
///
/// A segment may produce several issues (e.g. out of range and inverted). Each one is also
/// logged at `warn` level.
pub fn validate_morphing_segments(pairs: &MorphPairs, progress: f64) -> MorphReport {
    let progress = clamp_progress(progress);
    let mut issues = Vec::new();

    for pair in pairs {
        for (segment_index, (current, target)) in pair.iter().enumerate() {
            let blended = current.lerp(target, progress);
            let mut push = |kind: MorphIssueKind| {
                tracing::warn!(
                    slice = pair.slice_index,
                    segment = segment_index,
                    progress,
                    top = blended.top,
                    bottom = blended.bottom,
                    ?kind,
                    "morph segment issue"
                );
                issues.push(MorphIssue {
                    slice_index: pair.slice_index,
                    segment_index,
                    kind,
                    blended,
                    current,
                    target,
                });
            };

            if is_center_collapse(blended) {
                push(MorphIssueKind::CenterCollapse);
            }
            let in_range = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
            if !in_range(blended.top) || !in_range(blended.bottom) {
                push(MorphIssueKind::OutOfRange);
            }
            if blended.top.partial_cmp(&blended.bottom) != Some(std::cmp::Ordering::Less) {
                push(MorphIssueKind::Inverted);
            }
        }
    }

    MorphReport { progress, issues }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/checks.rs"]
mod tests;
