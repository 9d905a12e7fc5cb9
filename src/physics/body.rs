use super::Collider;
use crate::math::Vec2;

#[cfg(feature = "serde-types")]
use serde::{Deserialize, Serialize};

/// A body is something that moves and can be pushed out of other bodies.
///
/// Bodies are owned by the caller. Integration writes `position` and `velocity`,
/// collision resolution writes only `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct Body {
    #[cfg_attr(feature = "serde-types", serde(with = "crate::math::serde_vec2"))]
    pub position: Vec2,
    #[cfg_attr(feature = "serde-types", serde(with = "crate::math::serde_vec2"))]
    pub velocity: Vec2,
    /// Acceleration, assumed constant over a time step.
    #[cfg_attr(feature = "serde-types", serde(with = "crate::math::serde_vec2"))]
    pub acceleration: Vec2,
    pub collider: Collider,
    /// Anchored bodies are never moved by collision resolution.
    pub anchored: bool,
}

impl Default for Body {
    fn default() -> Self {
        Body::new(Collider::new_circle(0.0))
    }
}

impl Body {
    /// A free body at rest at the origin.
    pub fn new(collider: Collider) -> Self {
        Self {
            position: Vec2::zero(),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            collider,
            anchored: false,
        }
    }

    pub fn new_circle(radius: f64) -> Self {
        Self::new(Collider::new_circle(radius))
    }

    pub fn new_rect(width: f64, height: f64) -> Self {
        Self::new(Collider::new_rect(width, height))
    }

    #[inline]
    pub fn with_position(mut self, pos: impl Into<[f64; 2]>) -> Self {
        let [x, y] = pos.into();
        self.position = Vec2::new(x, y);
        self
    }

    #[inline]
    pub fn with_velocity(mut self, vel: impl Into<[f64; 2]>) -> Self {
        let [x, y] = vel.into();
        self.velocity = Vec2::new(x, y);
        self
    }

    #[inline]
    pub fn with_acceleration(mut self, acc: impl Into<[f64; 2]>) -> Self {
        let [x, y] = acc.into();
        self.acceleration = Vec2::new(x, y);
        self
    }

    /// Offset the collider from the body's position.
    #[inline]
    pub fn with_offset(mut self, offset: impl Into<[f64; 2]>) -> Self {
        self.collider = self.collider.with_offset(offset);
        self
    }

    /// Make the body immovable by collision resolution.
    #[inline]
    pub fn anchored(mut self) -> Self {
        self.anchored = true;
        self
    }

    /// World-space center of the body's shape.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.collider.center(self.position)
    }
}

/// How much of a separation distance each of two bodies takes on.
///
/// Returns `None` if both bodies are anchored and nothing can move.
pub fn displacement_shares(b1: &Body, b2: &Body) -> Option<[f64; 2]> {
    match (b1.anchored, b2.anchored) {
        (false, false) => Some([0.5, 0.5]),
        (true, false) => Some([0.0, 1.0]),
        (false, true) => Some([1.0, 0.0]),
        (true, true) => None,
    }
}
