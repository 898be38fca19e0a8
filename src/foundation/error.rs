/// Convenience result type used across slicemorph.
pub type SliceMorphResult<T> = Result<T, SliceMorphError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SliceMorphError {
    /// Invalid caller-provided dimensions, buffers or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while shaping or rasterizing text into a pixel buffer.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SliceMorphError {
    /// Build a [`SliceMorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SliceMorphError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`SliceMorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
