use crate::math::{self as m, Vec2};

#[cfg(feature = "serde-types")]
use serde::{Deserialize, Serialize};

/// The hit bounds of a body: a shape plus its offset from the body's position.
///
/// Where the offset points depends on the shape:
/// for circles it's the center, for rects the min (bottom left) corner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(Serialize, Deserialize))]
pub struct Collider {
    #[cfg_attr(feature = "serde-types", serde(with = "m::serde_vec2", default = "zero"))]
    pub offset: Vec2,
    pub shape: ColliderShape,
}

/// The physical shape of a collider.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(Serialize, Deserialize))]
pub enum ColliderShape {
    Circle { r: f64 },
    /// Unlike the circle, a rect is stored by its full side lengths
    /// because it's anchored at a corner rather than the center.
    Rect { w: f64, h: f64 },
}

#[cfg(feature = "serde-types")]
fn zero() -> Vec2 {
    Vec2::zero()
}

impl Collider {
    /// Create a circle collider from a radius, centered on the body's position.
    pub fn new_circle(radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "negative circle radius {radius}");
        Collider {
            offset: Vec2::zero(),
            shape: ColliderShape::Circle { r: radius },
        }
    }

    /// Create a rect collider with both sides set to the same length.
    pub fn new_square(side_length: f64) -> Self {
        Collider::new_rect(side_length, side_length)
    }

    /// Create a rect collider with two different side lengths,
    /// with its min corner at the body's position.
    pub fn new_rect(width: f64, height: f64) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "negative rect dimensions {width}x{height}"
        );
        Collider {
            offset: Vec2::zero(),
            shape: ColliderShape::Rect {
                w: width,
                h: height,
            },
        }
    }

    /// Set the offset of the shape from the body's position in a builder-like chain.
    pub fn with_offset(mut self, offset: impl Into<[f64; 2]>) -> Self {
        let [x, y] = offset.into();
        self.offset = Vec2::new(x, y);
        self
    }

    pub fn is_circle(&self) -> bool {
        matches!(self.shape, ColliderShape::Circle { .. })
    }

    /// World-space position of the shape's anchor point
    /// (circle center or rect min corner) for a body at `position`.
    #[inline]
    pub fn anchor(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }

    /// World-space center of the shape for a body at `position`.
    pub fn center(&self, position: Vec2) -> Vec2 {
        match self.shape {
            ColliderShape::Circle { .. } => self.anchor(position),
            ColliderShape::Rect { w, h } => self.anchor(position) + 0.5 * Vec2::new(w, h),
        }
    }

    /// World-space bounding box of the shape for a body at `position`.
    pub fn aabb(&self, position: Vec2) -> AABB {
        let anchor = self.anchor(position);
        match self.shape {
            ColliderShape::Circle { r } => AABB {
                min: anchor - Vec2::broadcast(r),
                max: anchor + Vec2::broadcast(r),
            },
            ColliderShape::Rect { w, h } => AABB {
                min: anchor,
                max: anchor + Vec2::new(w, h),
            },
        }
    }

    pub fn area(&self) -> f64 {
        match self.shape {
            ColliderShape::Circle { r } => std::f64::consts::PI * r * r,
            ColliderShape::Rect { w, h } => w * h,
        }
    }
}

/// An axis-aligned bounding box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        0.5 * (self.min + self.max)
    }

    /// Half of the width and height.
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        0.5 * (self.max - self.min)
    }

    /// Inclusive overlap test: boxes that exactly touch count as overlapping.
    pub fn overlaps(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// The point inside the box closest to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        m::clamp_components(point, self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_center_is_offset_from_corner() {
        let coll = Collider::new_rect(4.0, 2.0).with_offset([1.0, 1.0]);
        let pos = Vec2::new(10.0, 0.0);
        assert_eq!(coll.anchor(pos), Vec2::new(11.0, 1.0));
        assert_eq!(coll.center(pos), Vec2::new(13.0, 2.0));

        let aabb = coll.aabb(pos);
        assert_eq!(aabb.min, Vec2::new(11.0, 1.0));
        assert_eq!(aabb.max, Vec2::new(15.0, 3.0));
        assert_eq!(aabb.half_extents(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn circle_center_is_offset() {
        let coll = Collider::new_circle(3.0).with_offset([0.0, -1.0]);
        let pos = Vec2::new(2.0, 2.0);
        assert_eq!(coll.center(pos), Vec2::new(2.0, 1.0));

        let aabb = coll.aabb(pos);
        assert_eq!(aabb.min, Vec2::new(-1.0, -2.0));
        assert_eq!(aabb.width(), 6.0);
        assert_eq!(aabb.height(), 6.0);
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = Collider::new_square(1.0).aabb(Vec2::zero());
        let b = Collider::new_square(1.0).aabb(Vec2::new(1.0, 0.5));
        let c = Collider::new_square(1.0).aabb(Vec2::new(1.0001, 0.5));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[cfg(feature = "serde-types")]
    #[test]
    fn deserialize_from_ron() {
        let coll: Collider = ron::from_str("(offset: (0.5, 0.0), shape: Rect(w: 2.0, h: 1.0))").unwrap();
        assert_eq!(coll, Collider::new_rect(2.0, 1.0).with_offset([0.5, 0.0]));

        let coll: Collider = ron::from_str("(shape: Circle(r: 1.5))").unwrap();
        assert_eq!(coll, Collider::new_circle(1.5));
    }
}
