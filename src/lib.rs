//! Kinematic collision handling for 2D games.
//!
//! Answers three questions about circles and axis-aligned rects:
//! where does a body end up after a time step ([`integrator`]),
//! do two bodies overlap ([`collision::collide`]),
//! and how should they be pushed apart if they do ([`collision::resolve_colliding_state`]).
//!
//! There is no continuous collision detection; fast or small bodies can tunnel
//! through each other. Resolution is purely positional,
//! with no mass, restitution or friction.

pub mod math;
pub use math::{uv, Unit, Vec2};

pub mod params;
pub use params::{CircleRectPolicy, ParamsError, ResolverParams};

pub mod physics;
pub use physics::{
    body::{displacement_shares, Body},
    collision::{self, Collider, ColliderShape, Resolver, AABB},
    integrator,
};
