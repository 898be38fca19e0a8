use crate::foundation::error::{SliceMorphError, SliceMorphResult};

/// Easing curve applied to raw morph progress.
///
/// Serializes as the snake_case variant name and deserializes through [`parse_ease`], so CSS
/// keywords such as `"ease-in-out"` are accepted too.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    #[default]
    InOutCubic,
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve. Every curve fixes `0` and `1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = SliceMorphError;

    fn try_from(name: String) -> SliceMorphResult<Self> {
        parse_ease(&name)
    }
}

/// Parse an easing name: the snake_case variant names, or the CSS keywords `linear`, `ease-in`,
/// `ease-out` and `ease-in-out` (mapped to the cubic curves).
pub fn parse_ease(name: &str) -> SliceMorphResult<Ease> {
    let ease = match name.trim().to_ascii_lowercase().as_str() {
        "linear" => Ease::Linear,
        "in_quad" => Ease::InQuad,
        "out_quad" => Ease::OutQuad,
        "in_out_quad" => Ease::InOutQuad,
        "in_cubic" | "ease-in" => Ease::InCubic,
        "out_cubic" | "ease-out" => Ease::OutCubic,
        "in_out_cubic" | "ease-in-out" | "ease" => Ease::InOutCubic,
        other => {
            return Err(SliceMorphError::validation(format!(
                "unknown easing '{other}'"
            )));
        }
    };
    Ok(ease)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
