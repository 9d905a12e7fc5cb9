//! Bodies, integration, and collision handling.
//!
//! Everything here works on caller-owned [`Body`] records and keeps no state between calls.
//! A typical frame looks like this:
//!
//! ```
//! use jostle::{collision, integrator, Body};
//!
//! let mut bodies = [
//!     Body::new_circle(5.0).with_velocity([1.0, 0.0]),
//!     Body::new_circle(5.0).with_position([8.0, 0.0]),
//! ];
//! let dt = 1.0 / 60.0;
//!
//! integrator::step_all(&mut bodies, dt);
//! let [a, b] = &mut bodies;
//! if collision::collide(a, b) {
//!     let moved = collision::resolve_colliding_state(a, b);
//!     assert!(moved > 0.0);
//! }
//! assert!(!collision::collide(&bodies[0], &bodies[1]));
//! ```

pub mod body;
pub use body::Body;

pub mod collision;
pub use collision::{Collider, ColliderShape};

pub mod integrator;
