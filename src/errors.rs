//! Error types for the simulation core.
//!
//! Degenerate geometry (zero separation, zero-magnitude normalization) is
//! not an error anywhere in the crate; those cases have defined zero
//! fallbacks. Only genuinely non-physical state is fatal.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// Total vehicle mass was not positive when computing acceleration.
    /// Dry mass > 0 is a construction precondition; integration for this
    /// vehicle cannot continue.
    #[error("non-physical vehicle mass {mass} kg; integration refused")]
    NonPhysicalMass { mass: f64 },
}
