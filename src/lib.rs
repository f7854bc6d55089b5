pub mod simulation;
pub mod configuration;
pub mod errors;

pub use simulation::states::{normalize_or_zero, Body, NVec3, Vehicle, VehicleState};
pub use simulation::forces::{gravitational_force, net_gravity, G};
pub use simulation::propulsion::{consume, ThrustSample, G0};
pub use simulation::integrator::euler_symplectic;
pub use simulation::collision::{first_impact, has_impacted};
pub use simulation::engine::{step_simulation, StepResult};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, LaunchConfig, ParametersConfig, ScenarioConfig, VehicleConfig,
};

pub use errors::SimError;
