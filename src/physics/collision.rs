mod collider;
pub use collider::{Collider, ColliderShape, AABB};

pub mod shape_shape;
pub use shape_shape::{collide, intersection_check};

pub mod resolve;
pub use resolve::{
    resolve_colliding_circles, resolve_colliding_rects, resolve_colliding_state, Resolver,
};
