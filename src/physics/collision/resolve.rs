//! Positional separation of overlapping bodies.
//!
//! There are no masses or impulses here. Overlapping bodies are simply moved
//! apart by the penetration depth plus a small collision offset, split between
//! them according to which of them are anchored.
//!
//! All functions assume the pair was already found to overlap with
//! [`collide`][super::collide]. Each algorithm documents what happens if it wasn't.

use super::collider::{ColliderShape, AABB};
use crate::math::{Unit, Vec2};
use crate::params::{CircleRectPolicy, ResolverParams};
use crate::physics::{body::displacement_shares, Body};

/// Moves overlapping bodies apart.
///
/// Stateless apart from its parameters, so one resolver can be shared by any
/// number of pairs. Calls on the same body must not run concurrently,
/// which the `&mut` borrows enforce.
#[derive(Clone, Copy, Debug, Default)]
pub struct Resolver {
    params: ResolverParams,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_params(params: ResolverParams) -> Self {
        Resolver { params }
    }

    /// Replace the default collision offset.
    ///
    /// Higher values leave a larger gap between resolved shapes.
    pub fn with_collision_offset(mut self, offset: f64) -> Self {
        self.params.collision_offset = offset;
        self
    }

    /// Replace the default handling of circle-rect pairs.
    pub fn with_circle_rect_policy(mut self, policy: CircleRectPolicy) -> Self {
        self.params.circle_rect = policy;
        self
    }

    pub fn params(&self) -> &ResolverParams {
        &self.params
    }

    /// Separate two overlapping bodies, moving only those that aren't anchored.
    ///
    /// Returns the total distance the bodies were moved apart.
    /// This is zero if both bodies are anchored, even if they still overlap.
    pub fn resolve(&self, b1: &mut Body, b2: &mut Body) -> f64 {
        use ColliderShape::*;
        match (b1.collider.shape, b2.collider.shape) {
            (Circle { .. }, Circle { .. }) => self.resolve_circles(b1, b2),
            (Circle { .. }, Rect { .. }) => self.resolve_circle_rect(b1, b2),
            (Rect { .. }, Circle { .. }) => self.resolve_circle_rect(b2, b1),
            (Rect { .. }, Rect { .. }) => self.resolve_rects(b1, b2),
        }
    }

    /// Push two circles apart along the line between their centers.
    ///
    /// If the circles don't overlap, the computed depth is negative
    /// and they are pulled together until they're `collision_offset` apart.
    pub fn resolve_circles(&self, c1: &mut Body, c2: &mut Body) -> f64 {
        let (r1, r2) = match (c1.collider.shape, c2.collider.shape) {
            (ColliderShape::Circle { r: r1 }, ColliderShape::Circle { r: r2 }) => (r1, r2),
            _ => return 0.0,
        };
        let Some([mult1, mult2]) = displacement_shares(c1, c2) else {
            log::debug!("both circles anchored, skipping resolution");
            return 0.0;
        };
        let offset = self.params.collision_offset;

        let delta = c2.center() - c1.center();
        let dist = delta.mag();
        let normal = if dist > 0.0 {
            Unit::new_unchecked(delta / dist)
        } else {
            // same position, push along the x axis by the full radii plus offset
            log::trace!("concentric circles at {:?}, separating along x", c1.center());
            Unit::unit_x()
        };

        let depth = r1 + r2 + offset - dist;
        c1.position -= normal * (mult1 * depth);
        c2.position += normal * (mult2 * depth);

        log::trace!("separated circles by {depth} along {:?}", *normal);
        depth
    }

    /// Push two rects apart along the axis where they overlap least,
    /// which makes landing on a platform stop the fall instead of
    /// shoving the body sideways.
    ///
    /// Rects that are apart on both axes are left where they are.
    /// Rects overlapping (or touching) on one axis only are separated on that axis.
    pub fn resolve_rects(&self, r1: &mut Body, r2: &mut Body) -> f64 {
        let Some([mult1, mult2]) = displacement_shares(r1, r2) else {
            log::debug!("both rects anchored, skipping resolution");
            return 0.0;
        };

        let aabb1 = r1.collider.aabb(r1.position);
        let aabb2 = r2.collider.aabb(r2.position);
        let (pen_x, pen_y) = axis_penetrations(&aabb1, &aabb2);

        // pick the shallow axis; on a tie, y wins
        let axis = if pen_x <= 0.0 && pen_y <= 0.0 {
            if pen_x > pen_y {
                Axis::X
            } else {
                Axis::Y
            }
        } else if pen_x <= 0.0 {
            Axis::X
        } else if pen_y <= 0.0 {
            Axis::Y
        } else {
            return 0.0;
        };

        // extend the depth by the offset to leave a gap
        let offset = self.params.collision_offset;
        let center1 = aabb1.center();
        let center2 = aabb2.center();
        let (shift, depth) = match axis {
            Axis::X => {
                let depth = offset - pen_x;
                let dir = if center1.x < center2.x { -1.0 } else { 1.0 };
                (Vec2::new(dir * depth, 0.0), depth)
            }
            Axis::Y => {
                let depth = offset - pen_y;
                let dir = if center1.y < center2.y { -1.0 } else { 1.0 };
                (Vec2::new(0.0, dir * depth), depth)
            }
        };
        r1.position += mult1 * shift;
        r2.position -= mult2 * shift;

        log::trace!("separated rects by {depth} along {:?}", axis);
        depth
    }

    /// Push a circle out of a rect along the shortest path.
    ///
    /// If the circle's center is outside the rect, this is the direction from the
    /// closest point of the rect to the center (an edge normal or a corner direction).
    /// If the center is inside, the circle is pushed out through the nearest edge.
    /// A circle that doesn't reach the rect is left where it is.
    pub fn resolve_circle_rect(&self, circle: &mut Body, rect: &mut Body) -> f64 {
        let r = match (circle.collider.shape, rect.collider.shape) {
            (ColliderShape::Circle { r }, ColliderShape::Rect { .. }) => r,
            _ => return 0.0,
        };
        if self.params.circle_rect == CircleRectPolicy::Ignore {
            log::debug!("circle-rect resolution disabled, skipping");
            return 0.0;
        }
        let Some([mult_c, mult_r]) = displacement_shares(circle, rect) else {
            log::debug!("circle and rect both anchored, skipping resolution");
            return 0.0;
        };
        let offset = self.params.collision_offset;

        let center = circle.center();
        let aabb = rect.collider.aabb(rect.position);
        let closest = aabb.closest_point(center);
        let to_center = center - closest;

        let (normal, depth) = if to_center.x != 0.0 || to_center.y != 0.0 {
            let dist = to_center.mag();
            if dist > r {
                return 0.0;
            }
            (Unit::new_unchecked(to_center / dist), r - dist + offset)
        } else {
            let (normal, edge_dist) = nearest_edge(&aabb, center);
            (normal, edge_dist + r + offset)
        };

        circle.position += normal * (mult_c * depth);
        rect.position -= normal * (mult_r * depth);

        log::trace!("separated circle from rect by {depth} along {:?}", *normal);
        depth
    }
}

#[derive(Clone, Copy, Debug)]
enum Axis {
    X,
    Y,
}

/// Signed overlap of two boxes on each axis.
///
/// Each value is the larger of the two ways the intervals could be separated,
/// so it's negative by the overlap depth if the intervals overlap.
/// Positive values (separated on that axis) are replaced with 1.
fn axis_penetrations(aabb1: &AABB, aabb2: &AABB) -> (f64, f64) {
    let mut pen_x = (aabb1.min.x - aabb2.max.x).max(aabb2.min.x - aabb1.max.x);
    let mut pen_y = (aabb1.min.y - aabb2.max.y).max(aabb2.min.y - aabb1.max.y);
    if pen_x > 0.0 {
        pen_x = 1.0;
    }
    if pen_y > 0.0 {
        pen_y = 1.0;
    }
    (pen_x, pen_y)
}

/// Outward normal of and distance to the edge of the box nearest to a point inside it.
/// Ties go to the edge checked first (left, right, bottom, top).
fn nearest_edge(aabb: &AABB, point: Vec2) -> (Unit<Vec2>, f64) {
    let edges = [
        (-Unit::unit_x(), point.x - aabb.min.x),
        (Unit::unit_x(), aabb.max.x - point.x),
        (-Unit::unit_y(), point.y - aabb.min.y),
        (Unit::unit_y(), aabb.max.y - point.y),
    ];
    let mut nearest = edges[0];
    for edge in &edges[1..] {
        if edge.1 < nearest.1 {
            nearest = *edge;
        }
    }
    nearest
}

/// Separate two overlapping bodies with the default [`Resolver`].
///
/// Returns the total distance the bodies were moved apart.
pub fn resolve_colliding_state(b1: &mut Body, b2: &mut Body) -> f64 {
    Resolver::default().resolve(b1, b2)
}

/// Separate two overlapping circles with the default [`Resolver`].
pub fn resolve_colliding_circles(c1: &mut Body, c2: &mut Body) -> f64 {
    Resolver::default().resolve_circles(c1, c2)
}

/// Separate two overlapping rects with the default [`Resolver`].
pub fn resolve_colliding_rects(r1: &mut Body, r2: &mut Body) -> f64 {
    Resolver::default().resolve_rects(r1, r2)
}
