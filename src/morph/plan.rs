use crate::foundation::core::Segment;

/// Matched segments for one column. Produced by the matcher, consumed by the interpolator.
///
/// `current[i]` morphs into `target[i]`; both vectors always have the same length.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchPair {
    /// Column index this pair belongs to.
    pub slice_index: usize,
    /// Start-of-morph segments.
    pub current: Vec<Segment>,
    /// End-of-morph segments.
    pub target: Vec<Segment>,
}

impl MatchPair {
    /// Number of morphing segments in this column.
    ///
    /// Counts the longer side, in case the pair was deserialized with unequal lengths.
    pub fn len(&self) -> usize {
        self.current.len().max(self.target.len())
    }

    /// `true` when the column has nothing to morph.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(current, target)` couples. A missing partner on the shorter side is
    /// [`Segment::SEED`].
    pub fn iter(&self) -> impl Iterator<Item = (Segment, Segment)> + '_ {
        (0..self.len()).map(|i| {
            (
                self.current.get(i).copied().unwrap_or(Segment::SEED),
                self.target.get(i).copied().unwrap_or(Segment::SEED),
            )
        })
    }
}

/// Frozen per-column matching for one transition, in column order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MorphPairs {
    pairs: Vec<MatchPair>,
}

impl MorphPairs {
    /// Wrap pairs already ordered by `slice_index`.
    pub fn new(pairs: Vec<MatchPair>) -> Self {
        Self { pairs }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when there are no columns.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pair for column `idx`.
    pub fn get(&self, idx: usize) -> Option<&MatchPair> {
        self.pairs.get(idx)
    }

    /// Pairs in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, MatchPair> {
        self.pairs.iter()
    }

    /// Total number of morphing segments across all columns.
    pub fn segment_count(&self) -> usize {
        self.pairs.iter().map(MatchPair::len).sum()
    }
}

impl<'a> IntoIterator for &'a MorphPairs {
    type Item = &'a MatchPair;
    type IntoIter = std::slice::Iter<'a, MatchPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
