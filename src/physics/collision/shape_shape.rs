//! Overlap tests between pairs of shapes.
//!
//! All tests are inclusive: shapes that exactly touch are considered colliding.

use super::collider::{ColliderShape, AABB};
use crate::math::{self as m, Vec2};
use crate::physics::{Body, Collider};

/// Checks whether two bodies' shapes overlap.
#[inline]
pub fn collide(b1: &Body, b2: &Body) -> bool {
    intersection_check(b1.position, &b1.collider, b2.position, &b2.collider)
}

/// Checks two colliders placed at the given body positions for overlap.
pub fn intersection_check(pos1: Vec2, coll1: &Collider, pos2: Vec2, coll2: &Collider) -> bool {
    use ColliderShape::*;
    match (coll1.shape, coll2.shape) {
        (Circle { r: r1 }, Circle { r: r2 }) => {
            circle_circle(coll1.anchor(pos1), r1, coll2.anchor(pos2), r2)
        }
        (Circle { r }, Rect { .. }) => circle_rect(coll1.anchor(pos1), r, &coll2.aabb(pos2)),
        (Rect { .. }, Circle { r }) => circle_rect(coll2.anchor(pos2), r, &coll1.aabb(pos1)),
        (Rect { .. }, Rect { .. }) => rect_rect(&coll1.aabb(pos1), &coll2.aabb(pos2)),
    }
}

//
// CIRCLE <-> CIRCLE
//

pub fn circle_circle(center1: Vec2, r1: f64, center2: Vec2, r2: f64) -> bool {
    let r_sum = r1 + r2;
    (center2 - center1).mag_sq() <= r_sum * r_sum
}

//
// CIRCLE <-> RECT
//

pub fn circle_rect(center: Vec2, r: f64, rect: &AABB) -> bool {
    let dist = m::abs_components(center - rect.center());
    let half = rect.half_extents();

    if dist.x > half.x + r || dist.y > half.y + r {
        // too far to possibly intersect
        return false;
    }
    if dist.x <= half.x || dist.y <= half.y {
        // center is within the rect's extent on at least one axis
        return true;
    }
    // outside both edges, possible intersection with the corner point
    let c_to_corner = dist - half;
    c_to_corner.mag_sq() <= r * r
}

//
// RECT <-> RECT
//

#[inline]
pub fn rect_rect(rect1: &AABB, rect2: &AABB) -> bool {
    rect1.overlaps(rect2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_body(rng: &mut StdRng) -> Body {
        let body = if rng.gen_bool(0.5) {
            Body::new_circle(rng.gen_range(0.0..5.0))
        } else {
            Body::new_rect(rng.gen_range(0.0..8.0), rng.gen_range(0.0..8.0))
        };
        body.with_position([rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)])
            .with_offset([rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)])
    }

    #[test]
    fn collide_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut kinds_seen = [[false; 2]; 2];
        for _ in 0..2000 {
            let b1 = random_body(&mut rng);
            let b2 = random_body(&mut rng);
            kinds_seen[b1.collider.is_circle() as usize][b2.collider.is_circle() as usize] = true;
            assert_eq!(
                collide(&b1, &b2),
                collide(&b2, &b1),
                "asymmetric result for {:?} and {:?}",
                b1,
                b2
            );
        }
        assert!(kinds_seen.iter().flatten().all(|seen| *seen));
    }

    #[test]
    fn circles_touching_collide() {
        let a = Body::new_circle(5.0);
        let b = Body::new_circle(3.0).with_position([8.0, 0.0]);
        let c = Body::new_circle(3.0).with_position([8.001, 0.0]);
        assert!(collide(&a, &b));
        assert!(!collide(&a, &c));
    }

    #[test]
    fn rects_sharing_edge_collide() {
        let a = Body::new_rect(10.0, 10.0);
        let b = Body::new_rect(10.0, 10.0).with_position([10.0, 3.0]);
        let c = Body::new_rect(10.0, 10.0).with_position([10.0, 10.0]);
        let d = Body::new_rect(10.0, 10.0).with_position([10.0, 10.5]);
        assert!(collide(&a, &b));
        // corners touching
        assert!(collide(&a, &c));
        assert!(!collide(&a, &d));
    }

    #[test]
    fn offsets_are_applied() {
        let a = Body::new_rect(2.0, 2.0).with_offset([-1.0, -1.0]);
        let b = Body::new_circle(1.0).with_position([2.5, 0.0]);
        assert!(!collide(&a, &b));
        let b = b.with_offset([-0.5, 0.0]);
        assert!(collide(&a, &b));
    }

    #[test]
    fn circle_rect_corner_case() {
        // rect spans (0, 0)..(10, 10), top right corner at (10, 10)
        let rect = Body::new_rect(10.0, 10.0);
        // 3-4-5 triangle: exactly r away from the corner
        let on_corner = Body::new_circle(5.0).with_position([13.0, 14.0]);
        assert!(collide(&on_corner, &rect));
        assert!(collide(&rect, &on_corner));

        let past_corner = Body::new_circle(4.99).with_position([13.0, 14.0]);
        assert!(!collide(&past_corner, &rect));
        assert!(!collide(&rect, &past_corner));
    }

    #[test]
    fn circle_rect_edges() {
        let rect = Body::new_rect(10.0, 4.0);
        // inside
        assert!(collide(&Body::new_circle(0.5).with_position([5.0, 2.0]), &rect));
        // touching the right edge
        assert!(collide(&Body::new_circle(1.0).with_position([11.0, 2.0]), &rect));
        // beyond the top edge
        assert!(!collide(&Body::new_circle(1.0).with_position([5.0, 5.5]), &rect));
        // above the top edge, within its x extent
        assert!(collide(&Body::new_circle(1.5).with_position([9.9, 5.4]), &rect));
    }
}
