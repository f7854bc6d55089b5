//! Gravitational force model.
//!
//! Newtonian point-mass gravity from each body in the registry, summed into
//! a single net force on the vehicle. Coincident positions produce zero
//! force rather than a singularity.

use crate::simulation::states::{normalize_or_zero, Body, NVec3};

/// Gravitational constant (N m^2 / kg^2).
pub const G: f64 = 6.674_30e-11;

/// Force exerted by `body` on a point mass `target_m` at `target_x`.
///
/// Attractive: the result points from the target toward the body. A zero
/// separation returns the zero vector; the model breaks down there and the
/// simulation must not halt on a coincidental geometry.
pub fn gravitational_force(body: &Body, target_x: &NVec3, target_m: f64) -> NVec3 {
    let d = body.x - target_x;
    let r = d.norm();

    if r == 0.0 {
        return NVec3::zeros();
    }

    let magnitude = G * body.m * target_m / (r * r);
    normalize_or_zero(&d) * magnitude
}

/// Net gravitational force on a point mass at `target_x` from every body.
///
/// Plain summation over the registry; contributions commute up to
/// floating-point rounding.
pub fn net_gravity(bodies: &[Body], target_x: &NVec3, target_m: f64) -> NVec3 {
    bodies
        .iter()
        .fold(NVec3::zeros(), |acc, b| acc + gravitational_force(b, target_x, target_m))
}
