//! Time integration of body positions.
//!
//! Uses a kick-drift-kick split: half of the position update happens before
//! the velocity is changed and half after. For constant acceleration this
//! gives the exact `x + v*dt + a*dt²/2` at no more cost than plain Euler,
//! and input applied through acceleration shows up in position the same step.

use super::Body;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance a body's position and velocity by `dt` seconds in place.
#[inline]
pub fn step_position(body: &mut Body, dt: f64) {
    body.position += 0.5 * dt * body.velocity;
    body.velocity += dt * body.acceleration;
    body.position += 0.5 * dt * body.velocity;
}

/// Step every body in a slice forward by `dt`.
///
/// Bodies don't interact during integration, so with the `parallel` feature
/// enabled this is split across threads.
pub fn step_all(bodies: &mut [Body], dt: f64) {
    #[cfg(feature = "parallel")]
    bodies.par_iter_mut().for_each(|body| step_position(body, dt));
    #[cfg(not(feature = "parallel"))]
    bodies.iter_mut().for_each(|body| step_position(body, dt));
}
