//! Tuning parameters for collision resolution.

#[cfg(feature = "serde-types")]
use serde::{Deserialize, Serialize};

/// Distance added on top of the exact separation so that resolved shapes
/// end up slightly apart instead of exactly touching,
/// which would be detected as a collision again on the next frame.
pub const DEFAULT_COLLISION_OFFSET: f64 = 0.001;

/// What to do with a colliding circle and rect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-types", derive(Serialize, Deserialize))]
pub enum CircleRectPolicy {
    /// Push the circle out of the rect along the shortest path.
    #[default]
    Separate,
    /// Detect but never resolve circle-rect pairs.
    Ignore,
}

/// Parameters for a [`Resolver`][crate::collision::Resolver].
///
/// With the `serde-types` feature, can be deserialized from e.g. a RON file
/// with missing fields filled by defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct ResolverParams {
    pub collision_offset: f64,
    pub circle_rect: CircleRectPolicy,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            collision_offset: DEFAULT_COLLISION_OFFSET,
            circle_rect: CircleRectPolicy::default(),
        }
    }
}

/// Error when reading resolver parameters.
#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    #[cfg(feature = "serde-types")]
    #[error("Failed to parse resolver parameters")]
    Parse(#[from] ron::Error),
    #[error("Collision offset must be finite and non-negative, got {0}")]
    InvalidOffset(f64),
}

impl ResolverParams {
    /// Read parameters from a RON document.
    #[cfg(feature = "serde-types")]
    pub fn from_ron(text: &str) -> Result<Self, ParamsError> {
        let params: Self = ron::from_str(text)?;
        params.validated()
    }

    /// Check that the parameters make sense, returning them unchanged if they do.
    pub fn validated(self) -> Result<Self, ParamsError> {
        if !self.collision_offset.is_finite() || self.collision_offset < 0.0 {
            return Err(ParamsError::InvalidOffset(self.collision_offset));
        }
        Ok(self)
    }
}
