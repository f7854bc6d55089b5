//! Impact detection against the body registry.

use crate::simulation::states::{Body, Vehicle};

/// True iff the vehicle's center is within `body.radius` of the body's
/// center. Touching the surface exactly counts as an impact.
pub fn has_impacted(vehicle: &Vehicle, body: &Body) -> bool {
    (vehicle.state.x - body.x).norm() <= body.radius
}

/// First body the vehicle has impacted, in registry order.
pub fn first_impact<'a>(vehicle: &Vehicle, bodies: &'a [Body]) -> Option<&'a Body> {
    bodies.iter().find(|b| has_impacted(vehicle, b))
}
