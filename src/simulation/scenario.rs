//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the driving loop:
//! - numerical parameters (`Parameters`)
//! - body registry (`Vec<Body>` at t = 0)
//! - the vehicle, placed on the launch pad
//!
//! Launch placement is a one-time coordinate transform: the vehicle starts
//! on the first body's surface along +x, with its initial velocity and
//! thrust direction set from the launch angle (degrees above the horizon)
//! in the x-y plane. With an empty registry the vehicle starts at the frame
//! origin instead.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, Vehicle};

/// A fully-initialized simulation scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bodies: Vec<Body>,
    pub vehicle: Vehicle,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body {
                name: bc.name.clone(),
                m: bc.m,
                radius: bc.radius,
                x: NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                v: NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
            })
            .collect();

        let parameters = Parameters {
            t_end: cfg.parameters.t_end,
            h0: cfg.parameters.h0,
        };

        let v_cfg = cfg.vehicle;
        let mut vehicle = Vehicle::new(v_cfg.dry_mass, v_cfg.fuel_mass, v_cfg.max_thrust, v_cfg.isp);

        let launch = cfg.launch;
        let angle = launch.angle_deg.to_radians();
        let heading = NVec3::new(angle.cos(), angle.sin(), 0.0);

        // Pad on the first body's surface; velocities add to the body's own.
        if let Some(site) = bodies.first() {
            vehicle.state.x = site.x + NVec3::new(site.radius, 0.0, 0.0);
            vehicle.state.v = site.v + heading * launch.speed;
        } else {
            vehicle.state.v = heading * launch.speed;
        }
        vehicle.set_thrust_direction(&heading);
        vehicle.set_engine(launch.engine_on);

        Self {
            parameters,
            bodies,
            vehicle,
        }
    }
}
