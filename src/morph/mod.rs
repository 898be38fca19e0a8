pub(crate) mod interpolate;
pub(crate) mod matcher;
pub(crate) mod plan;
pub(crate) mod weights;
