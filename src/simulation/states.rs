//! Core state types for the spacecraft simulation.
//!
//! Defines the runtime structs:
//! - `Body` for a massive body (planet, moon, star)
//! - `Vehicle` / `VehicleState` for the powered spacecraft
//!
//! Positions and velocities are SI (metres, metres per second) in a shared
//! inertial reference frame.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Normalize `v`, returning the zero vector when its magnitude is zero.
///
/// Several call sites normalize a possibly-zero separation vector and must
/// continue without faulting, so the zero case is defined behavior here.
pub fn normalize_or_zero(v: &NVec3) -> NVec3 {
    v.try_normalize(0.0).unwrap_or_else(NVec3::zeros)
}

/// A massive body acting as a gravity source.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // label only, not used by the physics
    pub m: f64,       // mass (kg), > 0
    pub radius: f64,  // radius (m), >= 0, used for impact detection
    pub x: NVec3,     // position (m)
    pub v: NVec3,     // velocity (m/s)
}

impl Body {
    /// Advance the body by its own velocity over `dt`.
    ///
    /// Bodies are treated as static during a run; the driving loop never
    /// calls this. It exists so a caller can advance a body explicitly.
    pub fn drift(&mut self, dt: f64) {
        self.x += self.v * dt;
    }
}

/// The mutable portion of a vehicle, updated once per simulated step.
///
/// Gathered into one record so the `fuel_mass >= 0` invariant has a single
/// point of mutation (the propulsion/integration pipeline).
#[derive(Debug, Clone)]
pub struct VehicleState {
    pub x: NVec3,                // position (m)
    pub v: NVec3,                // velocity (m/s)
    pub fuel_mass: f64,          // remaining propellant (kg), >= 0
    pub engine_on: bool,
    pub thrust_direction: NVec3, // unit vector, or zero (yields zero thrust)
}

/// A powered spacecraft: fixed engine/structure parameters plus the
/// per-step mutable [`VehicleState`].
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub dry_mass: f64,   // mass without propellant (kg), > 0
    pub max_thrust: f64, // engine thrust at full throttle (N), >= 0
    pub isp: f64,        // specific impulse (s), > 0
    pub state: VehicleState,
}

impl Vehicle {
    /// Create a vehicle at the frame origin, at rest, engine off,
    /// thrust direction along +x.
    pub fn new(dry_mass: f64, fuel_mass: f64, max_thrust: f64, isp: f64) -> Self {
        Self {
            dry_mass,
            max_thrust,
            isp,
            state: VehicleState {
                x: NVec3::zeros(),
                v: NVec3::zeros(),
                fuel_mass,
                engine_on: false,
                thrust_direction: NVec3::new(1.0, 0.0, 0.0),
            },
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.state.fuel_mass
    }

    /// Command the engine on or off.
    ///
    /// Re-enabling with zero fuel is accepted but has no physical effect;
    /// the propulsion model delivers zero thrust and consumes nothing.
    pub fn set_engine(&mut self, on: bool) {
        self.state.engine_on = on;
    }

    /// Set the thrust direction, stored normalized.
    ///
    /// A zero input stays the zero vector, which subsequently produces zero
    /// thrust regardless of the engine state.
    pub fn set_thrust_direction(&mut self, direction: &NVec3) {
        self.state.thrust_direction = normalize_or_zero(direction);
    }
}
