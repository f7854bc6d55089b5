//! Fixed-step time integrator for the vehicle state.
//!
//! Semi-implicit (symplectic) Euler: the velocity is advanced first and the
//! position update uses the already-updated velocity. The ordering is a
//! deliberate accuracy choice and must not be swapped for plain Euler.

use crate::errors::SimError;
use crate::simulation::propulsion::{self, ThrustSample};
use crate::simulation::states::{NVec3, Vehicle};

/// Advance the vehicle by one step of size `dt` under `net_external_force`
/// plus its own thrust.
///
/// Consumes propellant first; F = ma uses the post-burn mass, a documented
/// first-order approximation. Returns the thrust sample so the caller can
/// surface a depletion notice.
///
/// Fails with [`SimError::NonPhysicalMass`] if the total mass is not
/// positive. Dry mass > 0 is a construction precondition, so the check is
/// defensive and unreachable under valid inputs.
pub fn euler_symplectic(
    vehicle: &mut Vehicle,
    net_external_force: &NVec3,
    dt: f64,
) -> Result<ThrustSample, SimError> {
    let sample = propulsion::consume(vehicle, dt);
    let total_force = net_external_force + sample.force;

    let current_mass = vehicle.total_mass();
    if current_mass <= 0.0 {
        return Err(SimError::NonPhysicalMass { mass: current_mass });
    }

    let acceleration = total_force / current_mass;

    // v_n+1 = v_n + a dt, then x_n+1 = x_n + v_n+1 dt
    let state = &mut vehicle.state;
    state.v += acceleration * dt;
    state.x += state.v * dt;

    Ok(sample)
}
