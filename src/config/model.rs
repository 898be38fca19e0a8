use crate::{
    animation::ease::Ease,
    foundation::error::{SliceMorphError, SliceMorphResult},
    morph::weights::MatcherConfig,
};

/// Timing of one morph transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    /// Transition length in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    /// Curve applied to linear time before interpolation.
    #[serde(default)]
    pub easing: Ease,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: Ease::default(),
        }
    }
}

impl AnimationConfig {
    /// Eased progress in `[0, 1]` after `elapsed_ms` of the transition.
    ///
    /// Negative or NaN elapsed time maps to `0`; anything past `duration_ms` maps to `1`.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing.apply(elapsed_ms / self.duration_ms)
    }

    /// Reject non-positive or non-finite durations.
    pub fn validate(&self) -> SliceMorphResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(SliceMorphError::validation(
                "animation.duration_ms must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Top-level settings for extracting, matching and drawing a morph.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphConfig {
    /// Number of vertical slice columns per slice map.
    #[serde(default = "default_slice_count")]
    pub slice_count: u32,
    /// SVG canvas width in user units.
    #[serde(default = "default_svg_width")]
    pub svg_width: f64,
    /// SVG canvas height in user units.
    #[serde(default = "default_svg_height")]
    pub svg_height: f64,
    /// Transition timing.
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Matcher weights.
    #[serde(default)]
    pub matching: MatcherConfig,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            slice_count: default_slice_count(),
            svg_width: default_svg_width(),
            svg_height: default_svg_height(),
            animation: AnimationConfig::default(),
            matching: MatcherConfig::default(),
        }
    }
}

impl MorphConfig {
    /// Parse a JSON config, filling omitted fields with defaults, and validate it.
    pub fn from_json(json: &str) -> SliceMorphResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| SliceMorphError::serde(format!("parse morph config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> SliceMorphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SliceMorphError::serde(format!("serialize morph config: {e}")))
    }

    /// Validate config invariants.
    pub fn validate(&self) -> SliceMorphResult<()> {
        if self.slice_count == 0 {
            return Err(SliceMorphError::validation("slice_count must be > 0"));
        }
        for (name, value) in [("svg_width", self.svg_width), ("svg_height", self.svg_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SliceMorphError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        self.animation.validate()?;
        self.matching.validate()
    }
}

fn default_slice_count() -> u32 {
    60
}

fn default_svg_width() -> f64 {
    600.0
}

fn default_svg_height() -> f64 {
    200.0
}

fn default_duration_ms() -> f64 {
    800.0
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
