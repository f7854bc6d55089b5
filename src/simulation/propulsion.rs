//! Propellant consumption and delivered thrust.
//!
//! Rocket-equation mass flow: `mdot = F / (Isp * g0)`. When the propellant
//! cannot cover a full step the engine burns what remains, the delivered
//! thrust is throttled by the remaining/required fraction, and the engine
//! shuts down.

use log::warn;

use crate::simulation::states::{NVec3, Vehicle};

/// Standard gravity at Earth's surface (m/s^2), fixed for Isp conversion.
pub const G0: f64 = 9.806_65;

/// Outcome of one propulsion step.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrustSample {
    /// Thrust force actually applied during the step (N).
    pub force: NVec3,
    /// Propellant burned during the step (kg).
    pub fuel_consumed: f64,
    /// True when the propellant ran out within this step.
    pub depleted: bool,
}

impl ThrustSample {
    fn idle() -> Self {
        Self {
            force: NVec3::zeros(),
            fuel_consumed: 0.0,
            depleted: false,
        }
    }
}

/// Burn propellant for `dt` seconds and return the delivered thrust.
///
/// Mutates `fuel_mass` and `engine_on` on the vehicle. With the engine off
/// or the tank empty this is a no-op returning zero thrust. Exhaustion
/// mid-step is a reportable transition, not an error: the sample carries
/// `depleted = true` and the engine is switched off.
pub fn consume(vehicle: &mut Vehicle, dt: f64) -> ThrustSample {
    let state = &mut vehicle.state;
    if !state.engine_on || state.fuel_mass <= 0.0 {
        return ThrustSample::idle();
    }

    let mass_flow_rate = vehicle.max_thrust / (vehicle.isp * G0);
    let needed = mass_flow_rate * dt;

    if needed <= state.fuel_mass {
        state.fuel_mass -= needed;
        ThrustSample {
            force: state.thrust_direction * vehicle.max_thrust,
            fuel_consumed: needed,
            depleted: false,
        }
    } else {
        // Partial burn: throttle by the share of the step the tank covers.
        let throttle = state.fuel_mass / needed;
        let consumed = state.fuel_mass;
        state.fuel_mass = 0.0;
        state.engine_on = false;
        warn!("fuel depleted, engine shut down");
        ThrustSample {
            force: state.thrust_direction * (vehicle.max_thrust * throttle),
            fuel_consumed: consumed,
            depleted: true,
        }
    }
}
