//! Per-step simulation pipeline.
//!
//! One step is an atomic sequence: gravity accumulation, propellant
//! consumption and thrust, integration, impact check. The caller owns the
//! vehicle, the body registry, and the clock; stopping the run means not
//! calling [`step_simulation`] again.

use crate::errors::SimError;
use crate::simulation::collision;
use crate::simulation::forces;
use crate::simulation::integrator;
use crate::simulation::states::{Body, Vehicle};

/// What happened during one simulated step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// The propellant ran out within this step and the engine shut down.
    pub fuel_depleted: bool,
    /// Name of the first body impacted this step, if any. An impact is a
    /// normal terminal outcome; the driving loop should stop stepping.
    pub impact: Option<String>,
}

/// Advance the vehicle by one step of size `dt` against `bodies`.
///
/// The vehicle is updated in place. Gravity is evaluated at the step's
/// starting position with the pre-burn total mass.
pub fn step_simulation(
    vehicle: &mut Vehicle,
    bodies: &[Body],
    dt: f64,
) -> Result<StepResult, SimError> {
    let net_gravity = forces::net_gravity(bodies, &vehicle.state.x, vehicle.total_mass());
    let sample = integrator::euler_symplectic(vehicle, &net_gravity, dt)?;
    let impact = collision::first_impact(vehicle, bodies).map(|b| b.name.clone());

    Ok(StepResult {
        fuel_depleted: sample.depleted,
        impact,
    })
}
