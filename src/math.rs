//! Types, aliases and helper operations for doing math with `ultraviolet`.
pub use ultraviolet as uv;

/// All positions, velocities and accelerations are 64-bit 2D vectors.
pub type Vec2 = uv::DVec2;

/// A wrapper type to indicate a vector should always be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit<T>(T);

impl Unit<Vec2> {
    pub const fn new_unchecked(v: Vec2) -> Self {
        Unit(v)
    }

    pub fn unit_x() -> Self {
        Unit(Vec2::unit_x())
    }

    pub fn unit_y() -> Self {
        Unit(Vec2::unit_y())
    }
}

impl<T> std::ops::Deref for Unit<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Neg for Unit<T>
where
    T: std::ops::Neg,
{
    type Output = Unit<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        Unit(-self.0)
    }
}

impl std::ops::Mul<f64> for Unit<Vec2> {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        self.0 * rhs
    }
}

/// Module to (de)serialize `Vec2`s as two-element tuples, e.g. `(3.0, 4.0)` in RON,
/// using the serde attribute `#[serde(with = "serde_vec2")]`.
#[cfg(feature = "serde-types")]
pub mod serde_vec2 {
    use super::*;

    pub fn serialize<S>(v: &Vec2, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::Serialize;
        [v.x, v.y].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec2, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        <[f64; 2]>::deserialize(deserializer).map(|[x, y]| Vec2::new(x, y))
    }
}

// Vec2 utils

/// Clamp each component of `v` into the box spanned by `min` and `max`.
#[inline]
pub fn clamp_components(v: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(v.x.max(min.x).min(max.x), v.y.max(min.y).min(max.y))
}

#[inline]
pub fn abs_components(v: Vec2) -> Vec2 {
    Vec2::new(v.x.abs(), v.y.abs())
}
