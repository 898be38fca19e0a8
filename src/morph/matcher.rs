use rayon::prelude::*;

use crate::{
    foundation::core::{Segment, SliceMap},
    morph::plan::{MatchPair, MorphPairs},
    morph::weights::{MatchWeights, MatcherConfig},
};

/// Pair every segment of `current` with one of `target` so that both outputs have equal length.
///
/// - both empty: both outputs empty
/// - `current` empty: each target grows out of a [`Segment::SEED`]
/// - `target` empty: each current segment shrinks into a [`Segment::SEED`]
/// - otherwise the longer side is kept in order and every entry receives a partner from the
///   shorter side, see [`MatcherConfig`] for the weights
///
/// Output length is always `max(current.len(), target.len())`.
pub fn match_segments(
    current: &[Segment],
    target: &[Segment],
    config: &MatcherConfig,
) -> (Vec<Segment>, Vec<Segment>) {
    match (current.is_empty(), target.is_empty()) {
        (true, true) => (Vec::new(), Vec::new()),
        (true, false) => (vec![Segment::SEED; target.len()], target.to_vec()),
        (false, true) => (current.to_vec(), vec![Segment::SEED; current.len()]),
        (false, false) if current.len() >= target.len() => {
            let partners = assign_partners(current, target, &config.converging);
            (current.to_vec(), partners)
        }
        (false, false) => {
            let partners = assign_partners(target, current, &config.diverging);
            (partners, target.to_vec())
        }
    }
}

/// [`match_segments`] for one column, tagged with its index.
pub fn match_column(
    slice_index: usize,
    current: &[Segment],
    target: &[Segment],
    config: &MatcherConfig,
) -> MatchPair {
    let (current, target) = match_segments(current, target, config);
    MatchPair {
        slice_index,
        current,
        target,
    }
}

/// Match every column `0..column_count` of two slice maps.
///
/// A column missing from either map is treated as empty. Columns are independent and matched in
/// parallel; the result is in column order and identical to a sequential run.
#[tracing::instrument(skip(current, target, config))]
pub fn match_slice_maps(
    current: &SliceMap,
    target: &SliceMap,
    column_count: usize,
    config: &MatcherConfig,
) -> MorphPairs {
    let pairs: Vec<MatchPair> = (0..column_count)
        .into_par_iter()
        .map(|idx| {
            match_column(
                idx,
                current.column(idx).unwrap_or(&[]),
                target.column(idx).unwrap_or(&[]),
                config,
            )
        })
        .collect();

    let pairs = MorphPairs::new(pairs);
    tracing::debug!(
        columns = pairs.len(),
        segments = pairs.segment_count(),
        "matched slice maps"
    );
    pairs
}

/// Weighted center/height distance between two segments, without the usage term.
pub fn pair_score(a: Segment, b: Segment, weights: &MatchWeights) -> f64 {
    weights.center * (a.center() - b.center()).abs()
        + weights.height * (a.height() - b.height()).abs()
}

struct Cost {
    center: f64,
    score: f64,
}

/// For each entry of `long`, pick a partner from `short`. Requires
/// `0 < short.len() <= long.len()`.
fn assign_partners(long: &[Segment], short: &[Segment], weights: &MatchWeights) -> Vec<Segment> {
    let cost: Vec<Vec<Cost>> = long
        .iter()
        .map(|&a| {
            short
                .iter()
                .map(|&b| Cost {
                    center: (a.center() - b.center()).abs(),
                    score: pair_score(a, b, weights),
                })
                .collect()
        })
        .collect();

    let mut partner: Vec<Option<usize>> = vec![None; long.len()];
    let mut short_taken = vec![false; short.len()];
    let mut uses = vec![0u32; short.len()];

    // Globally closest still-free pair first, until every short-side segment is used once.
    for _ in 0..short.len() {
        let mut best: Option<(usize, usize)> = None;
        for (i, row) in cost.iter().enumerate() {
            if partner[i].is_some() {
                continue;
            }
            for (j, c) in row.iter().enumerate() {
                if short_taken[j] {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((bi, bj)) => {
                        let b = &cost[bi][bj];
                        c.center < b.center || (c.center == b.center && c.score < b.score)
                    }
                };
                if better {
                    best = Some((i, j));
                }
            }
        }

        let Some((i, j)) = best else {
            break;
        };
        partner[i] = Some(j);
        short_taken[j] = true;
        uses[j] += 1;
    }

    // Surplus long-side entries share partners, penalized by how often each was already used.
    for (i, row) in cost.iter().enumerate() {
        if partner[i].is_some() {
            continue;
        }
        let mut best_j = 0usize;
        let mut best_score = f64::INFINITY;
        for (j, c) in row.iter().enumerate() {
            let score = c.score + weights.usage * f64::from(uses[j]);
            if score < best_score {
                best_score = score;
                best_j = j;
            }
        }
        partner[i] = Some(best_j);
        uses[best_j] += 1;
    }

    partner
        .into_iter()
        .map(|p| p.map_or(Segment::SEED, |j| short[j]))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/morph/matcher.rs"]
mod tests;
