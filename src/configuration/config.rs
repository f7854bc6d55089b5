//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – run length and step size
//! - [`VehicleConfig`]    – vehicle structure and engine parameters
//! - [`LaunchConfig`]     – launch-pad placement of the vehicle
//! - [`BodyConfig`]       – initial state for each massive body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 600.0          # total simulated time (s)
//!   h0: 1.0               # step size dt (s)
//!
//! vehicle:
//!   dry_mass: 5000.0      # kg
//!   fuel_mass: 2000.0     # kg
//!   max_thrust: 10000.0   # N
//!   isp: 300.0            # s
//!
//! launch:
//!   angle_deg: 45.0       # above the horizon, x-y plane
//!   speed: 100.0          # m/s relative to the pad
//!   engine_on: true
//!
//! bodies:
//!   - name: "Earth"
//!     m: 5.972e24
//!     radius: 6.371e6
//!     x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//! ```
//!
//! The scenario builder maps this configuration into the runtime structs
//! used by the driving loop.

use serde::Deserialize;

/// Run length and step size.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated time (s)
    pub h0: f64,    // time step size (s)
}

/// Vehicle structure and engine parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct VehicleConfig {
    pub dry_mass: f64,   // kg, > 0
    pub fuel_mass: f64,  // kg, >= 0
    pub max_thrust: f64, // N, >= 0
    pub isp: f64,        // s, > 0
}

/// Launch-pad placement: the vehicle starts on the first body's surface
/// with this heading and speed.
#[derive(Deserialize, Debug, Clone)]
pub struct LaunchConfig {
    pub angle_deg: f64, // launch angle above the horizon (degrees)
    pub speed: f64,     // initial speed relative to the pad (m/s)
    #[serde(default)]
    pub engine_on: bool, // ignite at t = 0
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // display label, also reported on impact
    pub m: f64,       // mass (kg)
    pub radius: f64,  // radius (m), impact threshold
    pub x: [f64; 3],  // initial position (m)
    pub v: [f64; 3],  // initial velocity (m/s)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub vehicle: VehicleConfig,
    pub launch: LaunchConfig,
    pub bodies: Vec<BodyConfig>, // gravity sources, first one is the launch site
}
