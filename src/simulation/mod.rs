pub mod states;
pub mod params;
pub mod forces;
pub mod propulsion;
pub mod integrator;
pub mod collision;
pub mod engine;
pub mod scenario;
