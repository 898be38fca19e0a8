use crate::foundation::error::{SliceMorphError, SliceMorphResult};

/// Relative influence of center distance, height difference and reuse count when the matcher
/// picks a partner for a surplus segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchWeights {
    /// Weight on `|center_a - center_b|`. The dominant term.
    pub center: f64,
    /// Weight on `|height_a - height_b|`.
    pub height: f64,
    /// Penalty per prior assignment of the same partner; spreads surplus segments out.
    pub usage: f64,
}

impl MatchWeights {
    /// Many segments folding into fewer: pure proximity, partners may be shared freely.
    pub const CONVERGING: Self = Self {
        center: 0.7,
        height: 0.3,
        usage: 0.0,
    };

    /// Few segments splitting into more: proximity plus a reuse penalty so one source does not
    /// feed every new segment.
    pub const DIVERGING: Self = Self {
        center: 0.5,
        height: 0.3,
        usage: 0.2,
    };

    pub(crate) fn validate(&self, field: &str) -> SliceMorphResult<()> {
        for (name, value) in [
            ("center", self.center),
            ("height", self.height),
            ("usage", self.usage),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SliceMorphError::validation(format!(
                    "{field}.{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Weights used by [`crate::match_segments`], chosen by which side of a column is longer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatcherConfig {
    /// Used when `current` has at least as many segments as `target`.
    #[serde(default = "default_converging")]
    pub converging: MatchWeights,
    /// Used when `target` has more segments than `current`.
    #[serde(default = "default_diverging")]
    pub diverging: MatchWeights,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            converging: MatchWeights::CONVERGING,
            diverging: MatchWeights::DIVERGING,
        }
    }
}

impl MatcherConfig {
    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> SliceMorphResult<()> {
        self.converging.validate("matching.converging")?;
        self.diverging.validate("matching.diverging")
    }
}

fn default_converging() -> MatchWeights {
    MatchWeights::CONVERGING
}

fn default_diverging() -> MatchWeights {
    MatchWeights::DIVERGING
}
